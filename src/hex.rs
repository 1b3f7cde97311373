//! Textual rendering of identifiers in the familiar `8-4-4-4-12` form.
//!
//! Only the first 128 bits are rendered. The version and variant nibbles
//! are fixed markers so the output looks like a random (v4) UUID to other
//! tooling; they carry no meaning for identifiers from this crate.

use crate::generator::Uuid;

const HEX: &[u8; 16] = b"0123456789abcdef";
const HEX128_LEN: usize = 36;
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// Renders the first 16 bytes of `uuid`, e.g.
/// `f81d4fae-7dec-41d0-8765-00a0c91e6bf6`.
///
/// Bytes 6 and 9 are swapped before the version nibble is written, so all
/// 8 counter bytes stay visible in the output.
#[must_use]
pub fn hex128(uuid: &Uuid) -> String {
    let mut head = [0u8; 16];
    head.copy_from_slice(&uuid[..16]);
    hex128_bytes(&head)
}

/// Same as [`hex128`] for a bare 128-bit prefix.
#[must_use]
pub fn hex128_bytes(bytes: &[u8; 16]) -> String {
    let marked = with_markers(*bytes);
    let mut out = String::with_capacity(HEX128_LEN);
    for (idx, (start, end)) in GROUPS.into_iter().enumerate() {
        if idx > 0 {
            out.push('-');
        }
        for &byte in &marked[start..end] {
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    out
}

/// The marked 128 bits that [`hex128`] renders, as a `uuid::Uuid`.
#[must_use]
pub fn to_uuid(uuid: &Uuid) -> uuid::Uuid {
    let mut head = [0u8; 16];
    head.copy_from_slice(&uuid[..16]);
    uuid::Uuid::from_bytes(with_markers(head))
}

/// Reports whether `id` has the shape [`hex128`] produces.
///
/// Upper case hex is rejected. The marker nibbles are not checked, so
/// lowercase v4 UUIDs from other libraries validate too.
#[must_use]
pub fn valid_hex128(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != HEX128_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(idx, &b)| {
        if HYPHENS.contains(&idx) {
            b == b'-'
        } else {
            matches!(b, b'0'..=b'9' | b'a'..=b'f')
        }
    })
}

fn with_markers(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes.swap(6, 9);
    // version 4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    // RFC 4122 variant
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

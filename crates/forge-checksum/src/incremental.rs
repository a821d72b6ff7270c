//! Incremental checksum update (RFC 1624).
//!
//! For a header checksum `HC` covering a word that changes from `m` to `m'`, RFC 1624 eqn. 3
//! gives
//!
//! ```text
//! HC' = ~(~HC + ~m + m')
//! ```
//!
//! Here the change is carried as a single signed [`Delta`] of `m - m'` (old minus new), which is
//! what a caller rewriting a field naturally has on hand. Subtracting the delta in the
//! complemented domain is the same as adding `~m + m'` there, so the result is bit-identical to
//! eqn. 3 for every non-zero delta. Unlike eqn. 2, eqn. 3 never turns a valid checksum into
//! `0xffff`, which is why the result always matches a from-scratch recomputation of a header that
//! is not entirely zero.

/// Signed change of a covered field: old value minus new value, both in host byte order.
///
/// Differences of two 16-bit fields lie within `-0xffff..=0xffff`. Larger magnitudes are reduced
/// modulo `0xffff`, which is how they would fold into the one's-complement sum anyway.
pub type Delta = i32;

/// Applies `delta` to a checksum held in host byte order.
///
/// A zero delta returns `check` unchanged, including the `0xffff` encoding that eqn. 3 would
/// otherwise normalise to `0x0000`.
pub fn adjust_u16(check: u16, delta: Delta) -> u16 {
    if delta == 0 {
        return check;
    }

    let magnitude = fold(delta.unsigned_abs());
    // Subtracting in one's complement is adding the bitwise NOT.
    let addend = if delta > 0 { !magnitude } else { magnitude };

    let sum = u32::from(!check) + u32::from(addend);
    !fold(sum)
}

/// Applies `delta` to the checksum field of a header, in place.
///
/// `check` is the two checksum bytes exactly as stored in the header (network byte order).
pub fn adjust(check: &mut [u8; 2], delta: Delta) {
    let host = u16::from_be_bytes(*check);
    *check = adjust_u16(host, delta).to_be_bytes();
}

/// Updates `check` for a covered 16-bit word changing from `old` to `new`.
pub fn replace_u16(check: u16, old: u16, new: u16) -> u16 {
    adjust_u16(check, i32::from(old) - i32::from(new))
}

/// Updates `check` for a covered, word-aligned 32-bit value changing from `old` to `new`.
///
/// The high half is the first word on the wire and is applied first.
pub fn replace_u32(check: u16, old: u32, new: u32) -> u16 {
    let check = replace_u16(check, (old >> 16) as u16, (new >> 16) as u16);
    replace_u16(check, old as u16, new as u16)
}

/// End-around-carry fold of a 32-bit accumulator into 16 bits.
fn fold(mut sum: u32) -> u16 {
    // Two rounds are enough for any 32-bit input: the first leaves at most 0x1fffe.
    sum = (sum & 0xffff) + (sum >> 16);
    sum = (sum & 0xffff) + (sum >> 16);
    sum as u16
}

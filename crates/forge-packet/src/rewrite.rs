use forge_checksum::{adjust, Delta};

use crate::header::ChecksummedHeader;
use crate::span::{Ipv4AddrField, Ipv4Span};

/// Writes `value` (host byte order) into the 16-bit word `field` of `header` and adjusts the
/// header's checksum to match.
///
/// The old value is captured before the write and the checksum moves by `old - value`. Exactly two
/// locations change: the word and the checksum. If the checksum was correct before the call it is
/// correct after it.
pub fn forge<H: ChecksummedHeader + ?Sized>(header: &mut H, field: H::Field, value: u16) {
    let word = header.word_mut(field);
    let before = u16::from_be_bytes(*word);
    *word = value.to_be_bytes();

    trace!(
        header = H::KIND,
        field = ?field,
        old = before,
        new = value,
        "field rewrite"
    );
    header.adjust_checksum(Delta::from(before) - Delta::from(value));
}

/// Writes `value` into the 32-bit `field` of the IPv4 header under `span`, adjusts the IPv4 header
/// checksum, and returns the previous value (host byte order).
///
/// The write always happens, even when `value` equals the current contents.
///
/// Only the IPv4 header checksum is touched. A TCP or UDP checksum that covers this address through
/// its pseudo-header still has to be repaired by the caller, e.g. with [`adjust_for_address`] and
/// the returned value.
pub fn forge_ipv4(span: &mut Ipv4Span<'_>, field: Ipv4AddrField, value: u32) -> u32 {
    let before = span.read(field);
    span.write(field, value);

    let mut check = span.checksum_bytes();
    adjust(&mut check, high_delta(before, value));
    adjust(&mut check, low_delta(before, value));

    trace!(
        field = ?field,
        old = before,
        new = value,
        checksum = u16::from_be_bytes(check),
        "ipv4 address rewrite"
    );
    span.set_checksum_bytes(check);
    before
}

/// Adjusts the checksum of a transport header for an IPv4 address in its pseudo-header changing
/// from `old` to `new`.
///
/// This is the counterpart a NAT runs on the TCP/UDP header after [`forge_ipv4`] rewrote the same
/// address in the IP header. The transport header itself is not modified apart from its checksum.
pub fn adjust_for_address<H: ChecksummedHeader + ?Sized>(header: &mut H, old: u32, new: u32) {
    trace!(header = H::KIND, old = old, new = new, "pseudo-header address change");
    header.adjust_checksum(high_delta(old, new));
    header.adjust_checksum(low_delta(old, new));
}

fn high_delta(old: u32, new: u32) -> Delta {
    Delta::from((old >> 16) as u16) - Delta::from((new >> 16) as u16)
}

fn low_delta(old: u32, new: u32) -> Delta {
    Delta::from(old as u16) - Delta::from(new as u16)
}

use core::net::Ipv4Addr;

use forge_checksum::IPV4_CHECKSUM_OFFSET;

use crate::header::{ipv4::Ipv4Header, truncated};
use crate::Result;

/// 32-bit fields of the fixed IPv4 header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ipv4AddrField {
    Source,
    Destination,
}

impl Ipv4AddrField {
    /// Byte offset of the field from the start of the IPv4 header.
    pub const fn offset(self) -> usize {
        match self {
            Ipv4AddrField::Source => 12,
            Ipv4AddrField::Destination => 16,
        }
    }
}

/// Untyped, length-checked view over the bytes of an IPv4 header.
///
/// Used where the caller only has packet bytes and an offset, not a typed header. Construction
/// guarantees the fixed 20-byte header is present, which covers every [`Ipv4AddrField`] and the
/// checksum, so accesses through the span never go out of bounds. Nothing else about the bytes is
/// checked; in particular the version nibble is not inspected.
#[derive(Debug)]
pub struct Ipv4Span<'a> {
    bytes: &'a mut [u8],
}

impl<'a> Ipv4Span<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Result<Self> {
        if bytes.len() < Ipv4Header::LEN {
            return Err(truncated(Ipv4Header::LEN, bytes.len()));
        }
        Ok(Self { bytes })
    }

    /// Span over the IPv4 header starting `offset` bytes into `packet` (e.g. past a link-layer
    /// header).
    pub fn at(packet: &'a mut [u8], offset: usize) -> Result<Self> {
        let len = packet.len();
        match packet.get_mut(offset..) {
            Some(rest) => Self::new(rest),
            None => Err(truncated(offset.saturating_add(Ipv4Header::LEN), len)),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a span holds at least the fixed header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Gives the bytes back, e.g. to reach the payload that follows the header.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.bytes
    }

    /// Stored header checksum, host byte order.
    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes(self.checksum_bytes())
    }

    pub fn read(&self, field: Ipv4AddrField) -> u32 {
        let at = field.offset();
        u32::from_be_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
        ])
    }

    pub fn addr(&self, field: Ipv4AddrField) -> Ipv4Addr {
        Ipv4Addr::from(self.read(field))
    }

    pub(crate) fn write(&mut self, field: Ipv4AddrField, value: u32) {
        let at = field.offset();
        let [a, b, c, d] = value.to_be_bytes();
        self.bytes[at] = a;
        self.bytes[at + 1] = b;
        self.bytes[at + 2] = c;
        self.bytes[at + 3] = d;
    }

    pub(crate) fn checksum_bytes(&self) -> [u8; 2] {
        [
            self.bytes[IPV4_CHECKSUM_OFFSET],
            self.bytes[IPV4_CHECKSUM_OFFSET + 1],
        ]
    }

    pub(crate) fn set_checksum_bytes(&mut self, check: [u8; 2]) {
        let [hi, lo] = check;
        self.bytes[IPV4_CHECKSUM_OFFSET] = hi;
        self.bytes[IPV4_CHECKSUM_OFFSET + 1] = lo;
    }
}

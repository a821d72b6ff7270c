use bytemuck::{Pod, Zeroable};

use super::{view, view_mut, ChecksummedHeader};
use crate::Result;

/// 16-bit words of the UDP header (RFC 768), excluding the checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UdpField {
    SourcePort,
    DestinationPort,
    /// The length is also summed in the IPv4 pseudo-header. [`forge`](crate::forge) only accounts
    /// for the header word; the caller repairs the pseudo-header half with another
    /// [`ChecksummedHeader::adjust_checksum`] by `old - new`.
    Length,
}

/// The 8-byte UDP header.
///
/// Over IPv4 a stored checksum of `0x0000` means the sender did not compute one. Rewrites leave
/// such a datagram without a checksum, and a computed `0x0000` is stored as `0xffff` so it can't
/// be mistaken for that marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct UdpHeader {
    src_port: [u8; 2],
    dst_port: [u8; 2],
    length: [u8; 2],
    check: [u8; 2],
}

impl UdpHeader {
    pub const LEN: usize = 8;

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        view(bytes)
    }

    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self> {
        view_mut(bytes)
    }

    pub fn src_port(&self) -> u16 {
        u16::from_be_bytes(self.src_port)
    }

    pub fn dst_port(&self) -> u16 {
        u16::from_be_bytes(self.dst_port)
    }

    pub fn length(&self) -> u16 {
        u16::from_be_bytes(self.length)
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes(self.check)
    }

    pub fn has_checksum(&self) -> bool {
        self.check != [0, 0]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl ChecksummedHeader for UdpHeader {
    type Field = UdpField;

    const KIND: &'static str = "udp";

    fn word_mut(&mut self, field: UdpField) -> &mut [u8; 2] {
        match field {
            UdpField::SourcePort => &mut self.src_port,
            UdpField::DestinationPort => &mut self.dst_port,
            UdpField::Length => &mut self.length,
        }
    }

    fn checksum_mut(&mut self) -> &mut [u8; 2] {
        &mut self.check
    }

    fn adjust_checksum(&mut self, delta: forge_checksum::Delta) {
        if !self.has_checksum() {
            return;
        }
        forge_checksum::adjust(&mut self.check, delta);
        if self.check == [0, 0] {
            self.check = [0xff, 0xff];
        }
    }
}

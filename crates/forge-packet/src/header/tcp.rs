use bytemuck::{Pod, Zeroable};

use super::{view, view_mut, ChecksummedHeader};
use crate::{Result, ViewError};

/// 16-bit words of the fixed TCP header (RFC 793), excluding the checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TcpField {
    SourcePort,
    DestinationPort,
    SequenceHigh,
    SequenceLow,
    AckHigh,
    AckLow,
    OffsetFlags,
    Window,
    UrgentPointer,
}

/// The 20-byte fixed portion of a TCP header.
///
/// The TCP checksum also covers the IPv4 pseudo-header, so rewriting an address in the enclosing
/// IP header needs a separate [`crate::adjust_for_address`] call on this view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct TcpHeader {
    src_port: [u8; 2],
    dst_port: [u8; 2],
    seq: [[u8; 2]; 2],
    ack: [[u8; 2]; 2],
    offset_flags: [u8; 2],
    window: [u8; 2],
    check: [u8; 2],
    urgent: [u8; 2],
}

impl TcpHeader {
    pub const LEN: usize = 20;

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        let header: &Self = view(bytes)?;
        header.validate()?;
        Ok(header)
    }

    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self> {
        let header: &mut Self = view_mut(bytes)?;
        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        let offset = self.offset_flags[0] >> 4;
        if offset < 5 {
            debug!(offset = offset, "rejecting TCP header with short data offset");
            return Err(ViewError::BadDataOffset { offset });
        }
        Ok(())
    }

    pub fn src_port(&self) -> u16 {
        u16::from_be_bytes(self.src_port)
    }

    pub fn dst_port(&self) -> u16 {
        u16::from_be_bytes(self.dst_port)
    }

    pub fn seq_number(&self) -> u32 {
        let [[a, b], [c, d]] = self.seq;
        u32::from_be_bytes([a, b, c, d])
    }

    pub fn ack_number(&self) -> u32 {
        let [[a, b], [c, d]] = self.ack;
        u32::from_be_bytes([a, b, c, d])
    }

    /// Header length in bytes, from the data offset nibble.
    pub fn header_len(&self) -> usize {
        usize::from(self.offset_flags[0] >> 4) * 4
    }

    /// The nine flag bits (NS through FIN).
    pub fn flags(&self) -> u16 {
        u16::from_be_bytes(self.offset_flags) & 0x01ff
    }

    pub fn window_size(&self) -> u16 {
        u16::from_be_bytes(self.window)
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes(self.check)
    }

    pub fn urgent_pointer(&self) -> u16 {
        u16::from_be_bytes(self.urgent)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl ChecksummedHeader for TcpHeader {
    type Field = TcpField;

    const KIND: &'static str = "tcp";

    fn word_mut(&mut self, field: TcpField) -> &mut [u8; 2] {
        match field {
            TcpField::SourcePort => &mut self.src_port,
            TcpField::DestinationPort => &mut self.dst_port,
            TcpField::SequenceHigh => &mut self.seq[0],
            TcpField::SequenceLow => &mut self.seq[1],
            TcpField::AckHigh => &mut self.ack[0],
            TcpField::AckLow => &mut self.ack[1],
            TcpField::OffsetFlags => &mut self.offset_flags,
            TcpField::Window => &mut self.window,
            TcpField::UrgentPointer => &mut self.urgent,
        }
    }

    fn checksum_mut(&mut self) -> &mut [u8; 2] {
        &mut self.check
    }
}

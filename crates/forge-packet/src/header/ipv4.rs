use core::net::Ipv4Addr;

use bytemuck::{Pod, Zeroable};

use super::{view, view_mut, ChecksummedHeader};
use crate::{forge, Result, ViewError};

/// 16-bit words of the fixed IPv4 header (RFC 791), excluding the checksum itself.
///
/// Addresses are split into their wire-order halves so a caller can rewrite them one word at a
/// time; [`crate::forge_ipv4`] rewrites a whole address at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ipv4Field {
    VersionIhlTos,
    TotalLength,
    Identification,
    FlagsFragment,
    TtlProtocol,
    SourceHigh,
    SourceLow,
    DestinationHigh,
    DestinationLow,
}

/// The 20-byte fixed portion of an IPv4 header. Options, if any, follow it in the caller's buffer
/// and are not part of the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Ipv4Header {
    version_ihl_tos: [u8; 2],
    total_len: [u8; 2],
    identification: [u8; 2],
    flags_fragment: [u8; 2],
    ttl_protocol: [u8; 2],
    check: [u8; 2],
    src: [[u8; 2]; 2],
    dst: [[u8; 2]; 2],
}

impl Ipv4Header {
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
        let version = self.version();
        if version != 4 {
            debug!(version = version, "rejecting non-IPv4 header");
            return Err(ViewError::NotIpv4 { version });
        }
        let ihl = self.ihl();
        if ihl < 5 {
            debug!(ihl = ihl, "rejecting IPv4 header with short IHL");
            return Err(ViewError::BadIhl { ihl });
        }
        Ok(())
    }

    pub fn version(&self) -> u8 {
        self.version_ihl_tos[0] >> 4
    }

    pub fn ihl(&self) -> u8 {
        self.version_ihl_tos[0] & 0x0f
    }

    /// Header length in bytes, options included.
    pub fn header_len(&self) -> usize {
        usize::from(self.ihl()) * 4
    }

    pub fn tos(&self) -> u8 {
        self.version_ihl_tos[1]
    }

    pub fn total_len(&self) -> u16 {
        u16::from_be_bytes(self.total_len)
    }

    pub fn identification(&self) -> u16 {
        u16::from_be_bytes(self.identification)
    }

    pub fn flags_fragment(&self) -> u16 {
        u16::from_be_bytes(self.flags_fragment)
    }

    pub fn ttl(&self) -> u8 {
        self.ttl_protocol[0]
    }

    pub fn protocol(&self) -> u8 {
        self.ttl_protocol[1]
    }

    /// Stored header checksum, host byte order.
    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes(self.check)
    }

    pub fn source(&self) -> Ipv4Addr {
        let [[a, b], [c, d]] = self.src;
        Ipv4Addr::new(a, b, c, d)
    }

    pub fn destination(&self) -> Ipv4Addr {
        let [[a, b], [c, d]] = self.dst;
        Ipv4Addr::new(a, b, c, d)
    }

    /// Rewrites the TTL, keeping the checksum consistent. TTL shares its word with the protocol.
    pub fn set_ttl(&mut self, ttl: u8) {
        let word = u16::from_be_bytes([ttl, self.protocol()]);
        forge(self, Ipv4Field::TtlProtocol, word);
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl ChecksummedHeader for Ipv4Header {
    type Field = Ipv4Field;

    const KIND: &'static str = "ipv4";

    fn word_mut(&mut self, field: Ipv4Field) -> &mut [u8; 2] {
        match field {
            Ipv4Field::VersionIhlTos => &mut self.version_ihl_tos,
            Ipv4Field::TotalLength => &mut self.total_len,
            Ipv4Field::Identification => &mut self.identification,
            Ipv4Field::FlagsFragment => &mut self.flags_fragment,
            Ipv4Field::TtlProtocol => &mut self.ttl_protocol,
            Ipv4Field::SourceHigh => &mut self.src[0],
            Ipv4Field::SourceLow => &mut self.src[1],
            Ipv4Field::DestinationHigh => &mut self.dst[0],
            Ipv4Field::DestinationLow => &mut self.dst[1],
        }
    }

    fn checksum_mut(&mut self) -> &mut [u8; 2] {
        &mut self.check
    }
}

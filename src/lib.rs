#![forbid(unsafe_code)]

//! Header field rewriting with incremental checksum maintenance.
//!
//! This crate only re-exports the workspace members so embedders can depend on one package:
//!
//! - [`checksum`] is `forge-checksum`: one's-complement arithmetic, full and incremental.
//! - Everything else is `forge-packet`: header views, field designators and the rewrite
//!   operations.
//!
//! A NAT rewriting the source address of a TCP packet touches both checksums, each through its
//! own call:
//!
//! ```
//! use forge::{adjust_for_address, forge_ipv4, Ipv4AddrField, Ipv4Span, TcpHeader};
//!
//! # fn main() -> forge::Result<()> {
//! let mut packet = [0u8; 40];
//! packet[0] = 0x45;
//! packet[32] = 0x50;
//! let (ip, tcp) = packet.split_at_mut(20);
//!
//! let mut span = Ipv4Span::new(ip)?;
//! let old = forge_ipv4(&mut span, Ipv4AddrField::Source, u32::from_be_bytes([10, 0, 0, 2]));
//!
//! let header = TcpHeader::from_bytes_mut(tcp)?;
//! adjust_for_address(header, old, u32::from_be_bytes([10, 0, 0, 2]));
//! # Ok(())
//! # }
//! ```

pub use forge_checksum as checksum;
pub use forge_packet::*;

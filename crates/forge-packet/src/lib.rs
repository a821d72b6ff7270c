#![forbid(unsafe_code)]

//! In-place rewriting of IPv4/TCP/UDP header fields with incremental checksum repair.
//!
//! Callers own the packet buffer. They borrow a typed header view ([`Ipv4Header`],
//! [`TcpHeader`], [`UdpHeader`]) or an untyped [`Ipv4Span`] over it, pick a field, and call one of
//! the rewrite operations:
//!
//! - [`forge`] writes a 16-bit field of any [`ChecksummedHeader`] and adjusts that header's
//!   checksum by the difference.
//! - [`forge_ipv4`] writes a 32-bit address of an IPv4 header through a raw span, adjusts the IPv4
//!   header checksum, and hands back the previous address.
//! - [`adjust_for_address`] repairs a TCP/UDP checksum after the caller changed an address that
//!   the transport pseudo-header covers. [`forge_ipv4`] never does this on its own; the two
//!   checksums have different coverage and are repaired independently.
//!
//! Only view construction can fail. Once a view exists every rewrite is total.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod error;
mod header;
mod rewrite;
mod span;

pub use error::{Result, ViewError};
pub use header::ipv4::{Ipv4Field, Ipv4Header};
pub use header::tcp::{TcpField, TcpHeader};
pub use header::udp::{UdpField, UdpHeader};
pub use header::ChecksummedHeader;
pub use rewrite::{adjust_for_address, forge, forge_ipv4};
pub use span::{Ipv4AddrField, Ipv4Span};

/// IP protocol numbers for the transport headers this crate understands.
pub const IPPROTO_TCP: u8 = 6;
pub const IPPROTO_UDP: u8 = 17;

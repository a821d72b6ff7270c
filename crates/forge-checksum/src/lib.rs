#![forbid(unsafe_code)]

//! One's-complement ("internet") checksum arithmetic.
//!
//! Two halves live here:
//!
//! - [`Checksum`] and the helpers built on it compute a checksum from scratch over a byte range
//!   (RFC 1071). Rewrite paths never call these; they exist so callers and tests can verify that an
//!   incrementally maintained checksum still matches the bytes it covers.
//! - [`adjust`] and friends update an existing checksum after a single covered 16-bit word changed,
//!   without touching the rest of the covered bytes (RFC 1624, eqn. 3).
//!
//! All values handed to the `*_u16` / `*_u32` functions are in host byte order. [`adjust`] takes
//! the checksum field exactly as it sits in the header (network byte order).

mod incremental;
mod sum;

pub use incremental::{adjust, adjust_u16, replace_u16, replace_u32, Delta};
pub use sum::{
    internet_checksum, ipv4_header_checksum, ones_complement_sum, transport_checksum_ipv4,
    Checksum, IPV4_CHECKSUM_OFFSET,
};

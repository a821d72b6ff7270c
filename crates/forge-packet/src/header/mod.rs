//! Typed, zero-copy header views.
//!
//! Each header is a `#[repr(C)]` struct made only of byte arrays, so it has alignment 1, no
//! padding, and exactly the wire layout. Views are obtained by casting a prefix of the caller's
//! buffer with `bytemuck`; nothing is copied and the caller keeps ownership of the bytes.

pub mod ipv4;
pub mod tcp;
pub mod udp;

use core::fmt;
use core::mem::size_of;

use bytemuck::Pod;

use crate::{Result, ViewError};

/// A header that carries a one's-complement checksum and addresses its 16-bit words by
/// designator.
///
/// Implementors hand out the word a designator names and the checksum field, both as the two
/// bytes stored on the wire. [`crate::forge`] does the rest.
pub trait ChecksummedHeader {
    /// Designator of a 16-bit word covered by the checksum.
    type Field: Copy + fmt::Debug;

    /// Short protocol name, used in diagnostics.
    const KIND: &'static str;

    /// The word named by `field`, in network byte order.
    fn word_mut(&mut self, field: Self::Field) -> &mut [u8; 2];

    /// The checksum field, in network byte order.
    fn checksum_mut(&mut self) -> &mut [u8; 2];

    /// Applies a signed adjustment (old minus new of a covered word) to the checksum.
    ///
    /// The default is a plain RFC 1624 update. Headers with checksum sentinels override it.
    fn adjust_checksum(&mut self, delta: forge_checksum::Delta) {
        forge_checksum::adjust(self.checksum_mut(), delta);
    }
}

pub(crate) fn view<T: Pod>(bytes: &[u8]) -> Result<&T> {
    let needed = size_of::<T>();
    let actual = bytes.len();
    let prefix = bytes.get(..needed).ok_or_else(|| truncated(needed, actual))?;
    bytemuck::try_from_bytes(prefix).map_err(|_| truncated(needed, actual))
}

pub(crate) fn view_mut<T: Pod>(bytes: &mut [u8]) -> Result<&mut T> {
    let needed = size_of::<T>();
    let actual = bytes.len();
    let prefix = bytes.get_mut(..needed).ok_or_else(|| truncated(needed, actual))?;
    bytemuck::try_from_bytes_mut(prefix).map_err(|_| truncated(needed, actual))
}

pub(crate) fn truncated(needed: usize, actual: usize) -> ViewError {
    debug!(needed = needed, actual = actual, "buffer too short for header view");
    ViewError::Truncated { needed, actual }
}

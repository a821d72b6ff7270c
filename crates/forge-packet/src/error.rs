use thiserror::Error;

pub type Result<T> = core::result::Result<T, ViewError>;

/// Why a buffer could not be viewed as a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("buffer too short: need {needed} bytes, have {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("not an IPv4 header (version {version})")]
    NotIpv4 { version: u8 },

    #[error("invalid IPv4 header length (IHL {ihl})")]
    BadIhl { ihl: u8 },

    #[error("invalid TCP data offset {offset}")]
    BadDataOffset { offset: u8 },
}

//! Error type for the cipher core.

/// Errors produced by the cipher core.
///
/// The only failure mode is a key or block slice whose length is not 16
/// bytes; every table lookup is total over the full byte range and the round
/// pipeline itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key or block input had the wrong length.
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length of the slice actually supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn check_len(buf: &[u8], expected: usize) -> Result<()> {
    if buf.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            expected,
            actual: buf.len(),
        })
    }
}

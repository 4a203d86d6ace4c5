//! AES-128 block cipher core.
//!
//! Implements the FIPS-197 forward and inverse cipher for a single 16-byte
//! block, together with the AES-128 key schedule. The crate exists to serve
//! as a trusted software reference when checking an independent
//! implementation (for example a hardware design) against known-answer
//! vectors, so it favors clarity over speed and makes no constant-time or
//! side-channel claims.
//!
//! The core never performs I/O: callers hand in byte slices, the crate hands
//! back fixed-size arrays or an [`Error`] when a length is wrong. Expanding a
//! key once yields a [`KeySchedule`] that can be shared freely (including
//! across threads) and reused for any number of blocks.
//!
//! ```
//! use aes128::{expand_key, encrypt_block, decrypt_block};
//!
//! let schedule = expand_key(&[0u8; 16]).unwrap();
//! let ciphertext = encrypt_block(&schedule, &[0u8; 16]).unwrap();
//! assert_eq!(decrypt_block(&schedule, &ciphertext).unwrap(), [0u8; 16]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod schedule;
mod state;
mod tables;

pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{Error, Result};
pub use crate::schedule::KeySchedule;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

//! Single-block forward and inverse cipher.

use crate::error::{check_len, Result};
use crate::schedule::KeySchedule;
use crate::state::State;
use crate::BLOCK_SIZE;

/// Expands a 16-byte AES-128 key into its round-key schedule.
///
/// Convenience wrapper around [`KeySchedule::expand`].
///
/// # Errors
///
/// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless
/// `key` is exactly 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    KeySchedule::expand(key)
}

/// Encrypts one 16-byte block under a pre-expanded schedule.
///
/// Each call is a pure function of `(schedule, plaintext)`; blocks are
/// independent (ECB-style, no chaining).
///
/// # Errors
///
/// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless
/// `plaintext` is exactly 16 bytes; nothing is transformed on failure.
pub fn encrypt_block(schedule: &KeySchedule, plaintext: &[u8]) -> Result<[u8; 16]> {
    let mut state = load_block(plaintext)?;

    state.add_round_key(schedule.round_key(0));
    for round in 1..10 {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();
        state.add_round_key(schedule.round_key(round));
    }
    // Final round skips MixColumns.
    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(schedule.round_key(10));

    Ok(state.to_bytes())
}

/// Decrypts one 16-byte block, exactly inverting [`encrypt_block`].
///
/// Round keys are consumed in the mirror order of encryption.
///
/// # Errors
///
/// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless
/// `ciphertext` is exactly 16 bytes; nothing is transformed on failure.
pub fn decrypt_block(schedule: &KeySchedule, ciphertext: &[u8]) -> Result<[u8; 16]> {
    let mut state = load_block(ciphertext)?;

    state.add_round_key(schedule.round_key(10));
    for round in (1..10).rev() {
        state.inv_shift_rows();
        state.inv_sub_bytes();
        state.add_round_key(schedule.round_key(round));
        state.inv_mix_columns();
    }
    state.inv_shift_rows();
    state.inv_sub_bytes();
    state.add_round_key(schedule.round_key(0));

    Ok(state.to_bytes())
}

fn load_block(block: &[u8]) -> Result<State> {
    check_len(block, BLOCK_SIZE)?;
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(block);
    Ok(State::from_bytes(&bytes))
}

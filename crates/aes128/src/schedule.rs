//! AES-128 key expansion.

use crate::error::{check_len, Result};
use crate::tables::{RCON, SBOX};
use crate::KEY_SIZE;

const NUM_WORDS: usize = 44;

/// The expanded key: 11 round keys of 16 bytes, derived once per key.
///
/// A schedule is immutable after construction and carries no other state, so
/// a single instance can be shared by reference across threads and reused
/// for any number of block operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: [[u8; 16]; 11],
}

impl KeySchedule {
    /// Expands a 16-byte key into the full schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`](crate::Error::InvalidLength) unless
    /// `key` is exactly 16 bytes.
    pub fn expand(key: &[u8]) -> Result<Self> {
        check_len(key, KEY_SIZE)?;

        let mut w = [0u32; NUM_WORDS];
        for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 4..NUM_WORDS {
            let mut temp = w[i - 1];
            if i % 4 == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ (u32::from(RCON[i / 4 - 1]) << 24);
            }
            w[i] = w[i - 4] ^ temp;
        }

        let mut round_keys = [[0u8; 16]; 11];
        for (round, rk) in round_keys.iter_mut().enumerate() {
            for word_idx in 0..4 {
                let bytes = w[round * 4 + word_idx].to_be_bytes();
                rk[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
            }
        }

        Ok(Self { round_keys })
    }

    /// Returns the round key for round `round` (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u8; 16] {
        &self.round_keys[round]
    }

    /// Number of round keys in the schedule (always 11 for AES-128).
    pub const NUM_ROUND_KEYS: usize = 11;
}

fn sub_word(word: u32) -> u32 {
    let bytes = word.to_be_bytes();
    u32::from_be_bytes([
        SBOX[bytes[0] as usize],
        SBOX[bytes[1] as usize],
        SBOX[bytes[2] as usize],
        SBOX[bytes[3] as usize],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    // FIPS-197 appendix A.1 expansion of 2b7e1516 28aed2a6 abf71588 09cf4f3c.
    const APPENDIX_A_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn round_key_zero_is_the_key_itself() {
        let schedule = KeySchedule::expand(&APPENDIX_A_KEY).unwrap();
        assert_eq!(schedule.round_key(0), &APPENDIX_A_KEY);
    }

    #[test]
    fn first_expanded_round_key_matches_appendix_a() {
        let schedule = KeySchedule::expand(&APPENDIX_A_KEY).unwrap();
        let expected: [u8; 16] = [
            0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
            0x76, 0x05,
        ];
        assert_eq!(schedule.round_key(1), &expected);
    }

    #[test]
    fn last_round_key_matches_appendix_a() {
        let schedule = KeySchedule::expand(&APPENDIX_A_KEY).unwrap();
        let expected: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(schedule.round_key(10), &expected);
    }

    #[test]
    fn schedule_always_holds_eleven_round_keys() {
        let schedule = KeySchedule::expand(&[0u8; 16]).unwrap();
        assert_eq!(KeySchedule::NUM_ROUND_KEYS, 11);
        let total: usize = (0..11).map(|r| schedule.round_key(r).len()).sum();
        assert_eq!(total, 176);
    }

    #[test]
    fn rejects_short_and_long_keys() {
        for len in [0usize, 1, 15, 17, 24, 32] {
            let buf = vec![0u8; len];
            assert_eq!(
                KeySchedule::expand(&buf),
                Err(Error::InvalidLength {
                    expected: 16,
                    actual: len
                })
            );
        }
    }
}

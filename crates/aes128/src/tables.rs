//! Fixed constant tables: S-box, inverse S-box, round constants.
//!
//! Rather than pasting the 256-entry literals from the standard, the tables
//! are derived at compile time from the field inverse and the AES affine
//! transform. They end up as ordinary read-only statics, shared by every
//! caller with no initialization code at runtime.

use crate::gf;

/// Forward S-box: affine transform of the GF(2^8) inverse.
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box, the exact inverse permutation of [`SBOX`].
pub(crate) const INV_SBOX: [u8; 256] = build_inv_sbox();

/// Round constants for the key schedule, one per expansion round.
pub(crate) const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

const fn affine(i: u8) -> u8 {
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[x] = affine(gf::inv(x as u8));
        x += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0usize;
    while x < 256 {
        table[SBOX[x] as usize] = x as u8;
        x += 1;
    }
    table
}

//! The working 4x4 state matrix and the round transformations.

use crate::gf::{mul, xtime};
use crate::tables::{INV_SBOX, SBOX};

/// One block mid-transform, stored column-major as FIPS-197 lays it out:
/// input byte `i` sits at row `i % 4` of column `i / 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    cols: [[u8; 4]; 4],
}

impl State {
    pub(crate) fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut cols = [[0u8; 4]; 4];
        for (i, &b) in bytes.iter().enumerate() {
            cols[i / 4][i % 4] = b;
        }
        Self { cols }
    }

    pub(crate) fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (i, b) in out.iter_mut().enumerate() {
            *b = self.cols[i / 4][i % 4];
        }
        out
    }

    /// SubBytes: S-box every byte of the state.
    pub(crate) fn sub_bytes(&mut self) {
        for col in self.cols.iter_mut() {
            for byte in col.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
        }
    }

    /// InvSubBytes: inverse S-box every byte.
    pub(crate) fn inv_sub_bytes(&mut self) {
        for col in self.cols.iter_mut() {
            for byte in col.iter_mut() {
                *byte = INV_SBOX[*byte as usize];
            }
        }
    }

    /// ShiftRows: rotate row `r` left by `r` positions.
    pub(crate) fn shift_rows(&mut self) {
        let old = self.cols;
        for row in 1..4 {
            for col in 0..4 {
                self.cols[col][row] = old[(col + row) % 4][row];
            }
        }
    }

    /// InvShiftRows: rotate row `r` right by `r` positions.
    pub(crate) fn inv_shift_rows(&mut self) {
        let old = self.cols;
        for row in 1..4 {
            for col in 0..4 {
                self.cols[(col + row) % 4][row] = old[col][row];
            }
        }
    }

    /// MixColumns: multiply each column by {03,01,01,02} modulo x^4 + 1.
    pub(crate) fn mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let [a0, a1, a2, a3] = *col;
            col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
            col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
            col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
            col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
        }
    }

    /// InvMixColumns: multiply each column by {0b,0d,09,0e} modulo x^4 + 1.
    pub(crate) fn inv_mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let [a0, a1, a2, a3] = *col;
            col[0] = mul(a0, 0x0e) ^ mul(a1, 0x0b) ^ mul(a2, 0x0d) ^ mul(a3, 0x09);
            col[1] = mul(a0, 0x09) ^ mul(a1, 0x0e) ^ mul(a2, 0x0b) ^ mul(a3, 0x0d);
            col[2] = mul(a0, 0x0d) ^ mul(a1, 0x09) ^ mul(a2, 0x0e) ^ mul(a3, 0x0b);
            col[3] = mul(a0, 0x0b) ^ mul(a1, 0x0d) ^ mul(a2, 0x09) ^ mul(a3, 0x0e);
        }
    }

    /// AddRoundKey: XOR a 16-byte round key into the state, column-major.
    pub(crate) fn add_round_key(&mut self, round_key: &[u8; 16]) {
        for (i, &k) in round_key.iter().enumerate() {
            self.cols[i / 4][i % 4] ^= k;
        }
    }
}

//! Arithmetic in GF(2^8) with the AES reduction polynomial.
//!
//! Everything here is `const fn` so the substitution tables in
//! [`crate::tables`] can be evaluated at compile time.

/// Multiplies by x modulo x^8 + x^4 + x^3 + x + 1.
#[inline]
pub(crate) const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Peasant multiplication of two field elements, reducing as it goes.
pub(crate) const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse via a^254, with `inv(0) == 0`.
pub(crate) const fn inv(a: u8) -> u8 {
    // a^254 = a^-1 for nonzero a; addition chain over repeated squarings.
    let a2 = mul(a, a);
    let a4 = mul(a2, a2);
    let a8 = mul(a4, a4);
    let a16 = mul(a8, a8);
    let a32 = mul(a16, a16);
    let a64 = mul(a32, a32);
    let a128 = mul(a64, a64);
    let mut out = mul(a128, a64);
    out = mul(out, a32);
    out = mul(out, a16);
    out = mul(out, a8);
    out = mul(out, a4);
    mul(out, a2)
}

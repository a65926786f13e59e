//! Arithmetic in GF(2^8).
//!
//! The field is GF(2)[x] / (x^8 + x^4 + x^3 + x + 1), the Rijndael field used
//! by AES. An element is a `u8` whose i-th bit is the coefficient of x^i, so
//! every operation here is closed over `u8` by construction.

/// Low byte of the reduction polynomial (x^8 is implicit).
const REDUCTION: u8 = 0x1B;

/// Add two field elements.
///
/// Addition is XOR, which makes it its own inverse: the same function is
/// used for subtraction.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two field elements.
///
/// Scans the bits of `b` from most to least significant. Each step
/// multiplies the accumulator by x (reducing modulo the field polynomial)
/// and then adds `a` if the current bit of `b` is set. Both conditional
/// steps are done with masks, so every input takes the same eight rounds.
pub fn mult(a: u8, b: u8) -> u8 {
    let mut acc: u8 = 0;

    for i in (0..8).rev() {
        // 0xFF if bit i of b is set, else 0x00
        let a_mask = ((b >> i) & 1).wrapping_neg();
        // 0x1B if the top bit of acc is about to be shifted out, else 0x00
        let reduce = (acc >> 7).wrapping_neg() & REDUCTION;

        acc = (acc << 1) ^ reduce ^ (a & a_mask);
    }

    acc
}

/// Multiplicative inverse, computed as `a^254`.
///
/// The multiplicative group has 255 elements, so `a^255 = 1` and
/// `a^254 = a^-1`. The power is taken along a fixed addition chain so the
/// number of multiplications never depends on `a`.
///
/// Zero has no inverse; `inverse(0)` returns 0. Callers must not treat
/// that as meaningful.
#[rustfmt::skip]
pub fn inverse(a: u8) -> u8 {
    let mut b = mult(a, a);     // a^2
    let mut c = mult(a, b);     // a^3
    b = mult(c, c);             // a^6
    b = mult(b, b);             // a^12
    c = mult(b, c);             // a^15
    b = mult(b, b);             // a^24
    b = mult(b, b);             // a^48
    b = mult(b, c);             // a^63
    b = mult(b, b);             // a^126
    b = mult(a, b);             // a^127
    mult(b, b)                  // a^254
}

/// Divide `a` by `b`.
///
/// # Panics
///
/// Panics if `b` is zero. Interpolation only divides by differences of
/// distinct x-coordinates, so reaching this means share validation was
/// bypassed.
pub fn div(a: u8, b: u8) -> u8 {
    if b == 0 {
        panic!("divide by zero in GF(2^8)");
    }

    mult(a, inverse(b))
}

//! Polynomials over GF(2^8) and Lagrange interpolation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::field::{add, div, mult};

/// A polynomial whose constant term is one byte of the secret.
///
/// `coefficients[0]` is the intercept; the higher coefficients are random.
/// The coefficients are wiped when the polynomial is dropped.
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Build a random polynomial of `degree` crossing the y axis at `intercept`.
    ///
    /// # Errors
    ///
    /// Returns the RNG's error if it cannot produce the random coefficients.
    pub fn random<R>(intercept: u8, degree: u8, rng: &mut R) -> Result<Self, rand::Error>
    where
        R: RngCore + CryptoRng,
    {
        let mut coefficients = vec![0u8; degree as usize + 1];
        coefficients[0] = intercept;

        let mut polynomial = Self { coefficients };
        rng.try_fill_bytes(&mut polynomial.coefficients[1..])?;

        Ok(polynomial)
    }

    #[cfg(test)]
    fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[cfg(test)]
    fn intercept(&self) -> u8 {
        self.coefficients[0]
    }

    /// Evaluate at `x` using Horner's method.
    pub fn evaluate(&self, x: u8) -> u8 {
        if x == 0 {
            return self.coefficients[0];
        }

        let (highest, rest) = match self.coefficients.split_last() {
            Some(split) => split,
            None => return 0,
        };

        rest.iter()
            .rev()
            .fold(*highest, |acc, &coeff| add(mult(acc, x), coeff))
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.coefficients.zeroize();
    }
}

/// Value at `x` of the polynomial passing through the sample points.
///
/// Uses the Lagrange form directly. Subtraction in the field is addition,
/// so each basis term is `(x + x_j) / (x_i + x_j)`.
///
/// # Panics
///
/// Panics if two x-samples are equal.
pub fn interpolate_polynomial(x_samples: &[u8], y_samples: &[u8], x: u8) -> u8 {
    debug_assert_eq!(x_samples.len(), y_samples.len());

    let mut result = 0u8;
    for (i, (&x_i, &y_i)) in x_samples.iter().zip(y_samples).enumerate() {
        let mut basis = 1u8;
        for (j, &x_j) in x_samples.iter().enumerate() {
            if i == j {
                continue;
            }
            let num = add(x, x_j);
            let denom = add(x_i, x_j);
            basis = mult(basis, div(num, denom));
        }
        result = add(result, mult(y_i, basis));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn test_random_sets_intercept() {
        let p = Polynomial::random(42, 2, &mut OsRng).unwrap();
        assert_eq!(p.intercept(), 42);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.evaluate(0), 42);
    }

    #[test]
    fn test_zero_degree_is_constant() {
        let p = Polynomial::random(0xAA, 0, &mut OsRng).unwrap();
        assert_eq!(p.evaluate(0x10), 0xAA);
        assert_eq!(p.evaluate(0xFF), 0xAA);
    }

    #[test]
    fn test_evaluate_known_polynomial() {
        // 3x^2 + x + 5 at x = 2: 3*4 ^ 2 ^ 5 = 0x0C ^ 0x02 ^ 0x05
        let p = Polynomial {
            coefficients: vec![0x05, 0x01, 0x03],
        };
        assert_eq!(p.evaluate(2), 0x0B);
        assert_eq!(p.evaluate(1), 0x05 ^ 0x01 ^ 0x03);
    }

    #[test]
    fn test_interpolate_recovers_intercept() {
        let p = Polynomial::random(0x7F, 3, &mut OsRng).unwrap();
        let xs = [1u8, 2, 3, 4];
        let ys: Vec<u8> = xs.iter().map(|&x| p.evaluate(x)).collect();

        assert_eq!(interpolate_polynomial(&xs, &ys, 0), 0x7F);
    }

    #[test]
    fn test_interpolate_at_sample_point() {
        let p = Polynomial::random(9, 2, &mut OsRng).unwrap();
        let xs = [10u8, 20, 30];
        let ys: Vec<u8> = xs.iter().map(|&x| p.evaluate(x)).collect();

        assert_eq!(interpolate_polynomial(&xs, &ys, 20), ys[1]);
        assert_eq!(interpolate_polynomial(&xs, &ys, 77), p.evaluate(77));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_interpolate_duplicate_x_panics() {
        interpolate_polynomial(&[3, 3], &[1, 2], 0);
    }
}

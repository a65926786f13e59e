//! Shamir secret sharing over GF(2^8).
//!
//! A secret is split byte by byte: each byte becomes the constant term of its
//! own random polynomial of degree `threshold - 1`, and share `i` holds that
//! polynomial evaluated at `x = i + 1`. The x-coordinate is stored once, as
//! the last byte of the share:
//!
//! ```text
//! share = [ y_0 | y_1 | ... | y_{n-1} | x ]
//! ```
//!
//! Any `threshold` distinct shares recover the secret by Lagrange
//! interpolation at zero. Fewer shares carry no information about it.
//!
//! [`combine`] cannot tell whether it was given enough shares. With fewer
//! than the original threshold it returns bytes that are well defined but
//! unrelated to the secret, and reports no error. Callers who know the
//! threshold must enforce it themselves.

mod field;
mod polynomial;

pub use field::{add, div, inverse, mult};
pub use polynomial::{interpolate_polynomial, Polynomial};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants::{MAX_SHARES, MIN_THRESHOLD, SHARE_OVERHEAD};
use crate::error::{Result, ShamirError};

/// Split `secret` into `parts` shares, any `threshold` of which recover it.
///
/// Each share is `secret.len() + SHARE_OVERHEAD` bytes long. Randomness comes
/// from the operating system's CSPRNG.
///
/// # Errors
///
/// Returns `ShamirError` if `parts < threshold`, `parts > 255`,
/// `threshold < 2`, `threshold > 255`, the secret is empty, or the random
/// source fails.
pub fn split(secret: &[u8], parts: usize, threshold: usize) -> Result<Vec<Vec<u8>>> {
    split_with_rng(secret, parts, threshold, &mut OsRng)
}

/// Same as [`split`], drawing coefficients from `rng`.
pub fn split_with_rng<R>(
    secret: &[u8],
    parts: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Vec<u8>>>
where
    R: RngCore + CryptoRng,
{
    if parts < threshold {
        return Err(ShamirError::PartsBelowThreshold.into());
    }
    if parts > MAX_SHARES {
        return Err(ShamirError::TooManyParts.into());
    }
    if threshold < MIN_THRESHOLD {
        return Err(ShamirError::ThresholdTooSmall.into());
    }
    if threshold > MAX_SHARES {
        return Err(ShamirError::ThresholdTooLarge.into());
    }
    if secret.is_empty() {
        return Err(ShamirError::EmptySecret.into());
    }

    debug!(parts, threshold, secret_len = secret.len(), "splitting secret");

    // Bounds above guarantee these fit in a byte.
    let degree = (threshold - 1) as u8;

    let mut out: Vec<Vec<u8>> = (0..parts)
        .map(|i| {
            let mut share = vec![0u8; secret.len() + SHARE_OVERHEAD];
            share[secret.len()] = i as u8 + 1;
            share
        })
        .collect();

    for (idx, &byte) in secret.iter().enumerate() {
        let polynomial = Polynomial::random(byte, degree, rng).map_err(|e| {
            out.iter_mut().for_each(|share| share.zeroize());
            ShamirError::Random(e)
        })?;

        for (i, share) in out.iter_mut().enumerate() {
            share[idx] = polynomial.evaluate(i as u8 + 1);
        }
    }

    Ok(out)
}

/// Recover a secret from shares produced by [`split`].
///
/// Every share takes part in the interpolation, so passing more than the
/// threshold is fine. Passing fewer is not detected (see the module docs).
///
/// # Errors
///
/// Returns `ShamirError` if fewer than two shares are given, the first share
/// is shorter than two bytes, the shares differ in length, or two shares
/// carry the same x-coordinate.
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<u8>> {
    if shares.len() < 2 {
        return Err(ShamirError::NotEnoughShares.into());
    }

    let share_len = shares[0].as_ref().len();
    if share_len < 2 {
        return Err(ShamirError::ShareTooShort.into());
    }
    if shares.iter().any(|s| s.as_ref().len() != share_len) {
        return Err(ShamirError::ShareLengthMismatch.into());
    }

    let secret_len = share_len - SHARE_OVERHEAD;

    let mut seen = [false; 256];
    let mut x_samples = Vec::with_capacity(shares.len());
    for share in shares {
        let x = share.as_ref()[secret_len];
        if seen[x as usize] {
            return Err(ShamirError::DuplicateShare.into());
        }
        seen[x as usize] = true;
        x_samples.push(x);
    }

    debug!(shares = shares.len(), secret_len, "combining shares");

    let mut y_samples = vec![0u8; shares.len()];
    let mut secret = vec![0u8; secret_len];
    for (idx, byte) in secret.iter_mut().enumerate() {
        for (y, share) in y_samples.iter_mut().zip(shares) {
            *y = share.as_ref()[idx];
        }
        *byte = interpolate_polynomial(&x_samples, &y_samples, 0);
    }
    y_samples.zeroize();

    Ok(secret)
}

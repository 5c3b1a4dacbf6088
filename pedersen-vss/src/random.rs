//! Uniform sampling of nonzero big integers below a bound.
//!
//! Draws use rejection sampling over raw generator bytes. Entropy is pulled with
//! [`RngCore::try_fill_bytes`](rand::RngCore::try_fill_bytes), so a failing generator surfaces
//! as [`Error::Randomness`] instead of a panic or a weaker fallback.

use crate::{Error, Rng};
use num_bigint::BigUint;
use num_traits::Zero;

/// Draw an integer uniformly at random from `(0, n - 1)`.
///
/// The candidate is drawn from `[0, n - 1)` and redrawn while it is zero, so the result is
/// strictly positive and strictly below `n - 1`.
///
/// Fails with [`Error::EmptyRange`] if `n <= 2` and with [`Error::Randomness`] if the generator
/// fails.
pub fn random_from_zn(rng: &mut impl Rng, n: &BigUint) -> Result<BigUint, Error> {
    sample_nonzero(rng, n, "random_from_zn")
}

/// [`random_from_zn`], tagging generator failures with the operation being performed.
pub(crate) fn sample_nonzero(
    rng: &mut impl Rng,
    n: &BigUint,
    operation: &'static str,
) -> Result<BigUint, Error> {
    if *n <= BigUint::from(2u32) {
        return Err(Error::EmptyRange { bound: n.clone() });
    }
    let max = n - 1u32;
    loop {
        let x = sample_below(rng, &max).map_err(|source| {
            let err = Error::Randomness { operation, source };
            tracing::warn!(error = %err, "secure random generator failed");
            err
        })?;
        if !x.is_zero() {
            return Ok(x);
        }
    }
}

/// Draw uniformly from `[0, max)` by masking random bytes to the bit length of `max - 1` and
/// rejecting candidates that are too large. Requires `max > 0`.
fn sample_below(rng: &mut impl Rng, max: &BigUint) -> Result<BigUint, rand_core::Error> {
    let bits = (max - 1u32).bits();
    if bits == 0 {
        return Ok(BigUint::zero());
    }
    let len = ((bits + 7) / 8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let mask = (0xffu16 >> (8 - top_bits)) as u8;

    let mut bytes = vec![0u8; len];
    loop {
        rng.try_fill_bytes(&mut bytes)?;
        bytes[0] &= mask;
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < *max {
            return Ok(candidate);
        }
    }
}

//! Pedersen commitments \[1\] to byte strings in the order-`q` subgroup of a safe-prime group.
//!
//! [`SchemeParameters`] are generated once per scheme execution with
//! [`SchemeParameters::generate`]. Commitments are formed with [`SchemeParameters::commit`] and
//! opened with [`Commitment::verify`].
//! ```
//! # use pedersen_vss::SchemeParameters;
//! # use std::sync::Arc;
//! # let mut rng = rand::thread_rng();
//! let params = Arc::new(SchemeParameters::generate(&mut rng)?);
//! let (commitment, key) = params.commit(&mut rng, b"secret")?;
//! assert!(commitment.verify(&key, b"secret"));
//! # Ok::<(), pedersen_vss::Error>(())
//! ```
//!
//! A commitment to `m` with decommitment key `r` is `g^H(m) * h^r mod p`, where `H` is SHA-256
//! reduced mod `q`.
//!
//! ## References
//!
//! 1. Torben Pryds Pedersen. "Non-interactive and information-theoretic secure verifiable secret
//!    sharing". 1992. URL: <https://www.cs.cornell.edu/courses/cs754/2001fa/129.PDF>

use crate::{random::sample_nonzero, Error, GroupParameters, Rng, SerializeBigUint};
use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{convert::TryFrom, sync::Arc};
use tracing::instrument;

/// Parameters for one execution of the commitment scheme: two generators `g` and `h` of the
/// order-`q` subgroup.
///
/// Nobody who commits under these parameters may know `log_g(h)`; whoever does can open a
/// commitment to any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSchemeParameters")]
pub struct SchemeParameters {
    group: Arc<GroupParameters>,
    #[serde(with = "SerializeBigUint")]
    g: BigUint,
    #[serde(with = "SerializeBigUint")]
    h: BigUint,
}

impl SchemeParameters {
    /// Generate fresh parameters in the embedded 4096-bit group.
    pub fn generate(rng: &mut impl Rng) -> Result<Self, Error> {
        Self::generate_in(GroupParameters::global(), rng)
    }

    /// Generate fresh parameters in the given group.
    ///
    /// `g` is the square of a random element, which lands in the subgroup of quadratic residues.
    /// `h` is a random element raised to the cofactor `(p - 1) / q`.
    ///
    /// **warning:** `h` is derived from this caller's randomness alone. Section 4.2 of Gennaro et
    /// al. (EUROCRYPT '99) has the players generate it with a coin-flipping protocol instead; use
    /// [`SchemeParameters::from_generators`] to import such an `h`.
    #[instrument(skip_all)]
    pub fn generate_in(group: Arc<GroupParameters>, rng: &mut impl Rng) -> Result<Self, Error> {
        let p = group.p();

        let g = loop {
            let random_g = sample_nonzero(rng, p, "g generation")?;
            let g = random_g.modpow(&BigUint::from(2u32), p);
            if !g.is_one() {
                break g;
            }
        };

        let cofactor = group.cofactor();
        let h = loop {
            let random_h = sample_nonzero(rng, p, "h generation")?;
            let h = random_h.modpow(&cofactor, p);
            if !h.is_one() && h != g {
                break h;
            }
        };

        tracing::debug!("generated scheme parameters");
        Ok(Self { group, g, h })
    }

    /// Produce parameters from generators that were derived elsewhere, e.g. from jointly
    /// generated randomness.
    ///
    /// Fails with [`Error::InvalidGenerator`] if either generator is outside the order-`q`
    /// subgroup or is the identity, or if `g == h`. With `g = 1` every secret opens every
    /// commitment; with `h = 1` the commitment reveals the secret's digest.
    pub fn from_generators(
        group: Arc<GroupParameters>,
        g: BigUint,
        h: BigUint,
    ) -> Result<Self, Error> {
        check_generator(&group, &g, "g")?;
        check_generator(&group, &h, "h")?;
        if g == h {
            return Err(Error::InvalidGenerator {
                name: "h",
                reason: "equal to g",
            });
        }
        Ok(Self { group, g, h })
    }

    /// Commit to `secret`, returning the commitment and the key that opens it.
    ///
    /// The decommitment key must stay private until the secret is revealed.
    #[instrument(skip_all)]
    pub fn commit(
        self: &Arc<Self>,
        rng: &mut impl Rng,
        secret: &[u8],
    ) -> Result<(Commitment, DecommitmentKey), Error> {
        let r = sample_nonzero(rng, self.group.q(), "r generation")?;

        let digest = hash_to_scalar(secret, self.group.q());
        let value = calculate_commitment(self, &digest, &r);

        Ok((
            Commitment {
                parameters: Arc::clone(self),
                value,
            },
            DecommitmentKey { r },
        ))
    }

    /// The group these parameters live in.
    pub fn group(&self) -> &GroupParameters {
        &self.group
    }

    /// The generator the hashed secret is raised to.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// The generator the decommitment key is raised to.
    pub fn h(&self) -> &BigUint {
        &self.h
    }
}

fn check_generator(group: &GroupParameters, x: &BigUint, name: &'static str) -> Result<(), Error> {
    if !group.contains(x) {
        return Err(Error::InvalidGenerator {
            name,
            reason: "not an element of the order-q subgroup",
        });
    }
    if x.is_one() {
        return Err(Error::InvalidGenerator {
            name,
            reason: "the identity element",
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct UncheckedSchemeParameters {
    group: Arc<GroupParameters>,
    #[serde(with = "SerializeBigUint")]
    g: BigUint,
    #[serde(with = "SerializeBigUint")]
    h: BigUint,
}

impl TryFrom<UncheckedSchemeParameters> for SchemeParameters {
    type Error = Error;

    fn try_from(unchecked: UncheckedSchemeParameters) -> Result<Self, Self::Error> {
        Self::from_generators(unchecked.group, unchecked.g, unchecked.h)
    }
}

/// A commitment to a single secret, together with the parameters it was formed under.
///
/// Share it with verifiers as soon as it is produced; they need the matching
/// [`DecommitmentKey`] and the secret to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    parameters: Arc<SchemeParameters>,
    #[serde(with = "SerializeBigUint")]
    value: BigUint,
}

impl Commitment {
    /// Check the commitment against a revealed decommitment key and secret.
    ///
    /// A wrong secret, a wrong key, or a corrupted commitment all give `false`.
    pub fn verify(&self, decommitment_key: &DecommitmentKey, secret: &[u8]) -> bool {
        let digest = hash_to_scalar(secret, self.parameters.group.q());
        let expected = calculate_commitment(&self.parameters, &digest, &decommitment_key.r);
        let verified = expected == self.value;
        if !verified {
            tracing::debug!("commitment did not open to the revealed secret");
        }
        verified
    }

    /// The parameters the commitment was formed under.
    pub fn parameters(&self) -> &Arc<SchemeParameters> {
        &self.parameters
    }

    /// The commitment value `c`, in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Reassemble a commitment received from another party.
    pub fn from_parts(parameters: Arc<SchemeParameters>, value: BigUint) -> Self {
        Self { parameters, value }
    }
}

/// The randomness that blinds a [`Commitment`]; revealing it with the secret opens the commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecommitmentKey {
    #[serde(with = "SerializeBigUint")]
    r: BigUint,
}

impl DecommitmentKey {
    /// Construct a decommitment key from a revealed `r`.
    pub fn new(r: BigUint) -> Self {
        Self { r }
    }

    /// The blinding exponent `r`.
    pub fn r(&self) -> &BigUint {
        &self.r
    }
}

/// Hash a secret with SHA-256 and reduce the big-endian digest mod `modulus`.
pub fn hash_to_scalar(secret: &[u8], modulus: &BigUint) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(secret)) % modulus
}

/// Compute `g^digest * h^r mod p`.
///
/// Both [`SchemeParameters::commit`] and [`Commitment::verify`] go through this function, so the
/// two sides can never disagree on the formula.
pub fn calculate_commitment(
    parameters: &SchemeParameters,
    digest: &BigUint,
    r: &BigUint,
) -> BigUint {
    let p = parameters.group.p();
    (parameters.g.modpow(digest, p) * parameters.h.modpow(r, p)) % p
}

/// Generate scheme parameters in the embedded group using operating system randomness.
pub fn generate_parameters() -> Result<Arc<SchemeParameters>, Error> {
    SchemeParameters::generate(&mut OsRng).map(Arc::new)
}

/// Commit to `secret` using operating system randomness.
pub fn commit(
    parameters: &Arc<SchemeParameters>,
    secret: &[u8],
) -> Result<(Commitment, DecommitmentKey), Error> {
    parameters.commit(&mut OsRng, secret)
}

/// Check `commitment` against a revealed decommitment key and secret.
pub fn verify(
    commitment: &Commitment,
    decommitment_key: &DecommitmentKey,
    secret: &[u8],
) -> bool {
    commitment.verify(decommitment_key, secret)
}

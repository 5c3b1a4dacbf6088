//! This crate implements Pedersen trapdoor commitments \[1\] over the order-`q` subgroup of the
//! multiplicative group modulo a fixed 4096-bit safe prime `p = 2q + 1`:
//! - [`GroupParameters`]: the process-wide safe prime and its Sophie Germain companion.
//! - [`SchemeParameters`]: the generators `g` and `h`, drawn fresh for each scheme execution.
//! - [`Commitment`] and [`DecommitmentKey`]: the output of committing to a secret, later opened
//!   with [`Commitment::verify`].
//!
//! ```
//! # use pedersen_vss::SchemeParameters;
//! # use std::sync::Arc;
//! # let mut rng = rand::thread_rng();
//! let params = Arc::new(SchemeParameters::generate(&mut rng)?);
//! let (commitment, key) = params.commit(&mut rng, b"hello")?;
//! assert!(commitment.verify(&key, b"hello"));
//! assert!(!commitment.verify(&key, b"hellp"));
//! # Ok::<(), pedersen_vss::Error>(())
//! ```
//!
//! The binding property rests on nobody knowing `log_g(h)`. [`SchemeParameters::generate`]
//! draws `h` from a single party's randomness, which is only sound when that party is not the
//! committer. Protocols with adversarial committers should derive `h` from jointly generated
//! randomness and import it with [`SchemeParameters::from_generators`].
//!
//! None of the arithmetic here is constant time.
//!
//! ## References
//!
//! 1. Torben Pryds Pedersen. "Non-interactive and information-theoretic secure verifiable secret
//!    sharing". 1992. URL: <https://www.cs.cornell.edu/courses/cs754/2001fa/129.PDF>
//!
//! 2. R. Gennaro, S. Jarecki, H. Krawczyk, T. Rabin. "Secure Distributed Key Generation for
//!    Discrete-Log Based Cryptosystems". EUROCRYPT 1999.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(broken_intra_doc_links)]

pub mod group;
pub mod pedersen;
pub mod random;

mod serde;

pub use crate::group::GroupParameters;
pub use crate::pedersen::{
    calculate_commitment, commit, generate_parameters, hash_to_scalar, verify, Commitment,
    DecommitmentKey, SchemeParameters,
};
pub use crate::serde::SerializeBigUint;

use num_bigint::BigUint;
use thiserror::*;

/// Error types that may arise from parameter setup and commitment operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The secure random number generator failed to produce bytes.
    #[error("{operation} failed: could not draw randomness")]
    Randomness {
        /// The operation that was drawing randomness.
        operation: &'static str,
        /// The underlying generator failure.
        #[source]
        source: rand_core::Error,
    },
    /// Caused by sampling below a bound that leaves no nonzero value to return.
    #[error("no nonzero value lies below {bound} - 1")]
    EmptyRange {
        /// The requested exclusive bound.
        bound: BigUint,
    },
    /// Caused by group parameters that do not describe a safe prime and its Sophie Germain prime.
    #[error("invalid group parameters: {reason}")]
    InvalidGroupParameters {
        /// What failed to hold.
        reason: &'static str,
    },
    /// Caused by importing a generator that cannot be used to commit: one outside the order-`q`
    /// subgroup, the identity, or a copy of the other generator.
    #[error("invalid generator {name}: {reason}")]
    InvalidGenerator {
        /// Which generator was rejected.
        name: &'static str,
        /// What failed to hold.
        reason: &'static str,
    },
}

/// A trait synonym for a cryptographically secure random number generator. This trait is
/// blanket-implemented for all valid types and will never need to be implemented by-hand.
pub trait Rng: rand::CryptoRng + rand::RngCore {}
impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}

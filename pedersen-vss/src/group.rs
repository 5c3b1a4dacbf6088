//! The fixed safe-prime group that every commitment is computed in.
//!
//! All arithmetic happens in the multiplicative group modulo a safe prime `p = 2q + 1`, where `q`
//! is a Sophie Germain prime. The subgroup of quadratic residues has prime order `q` and is where
//! the generators of [`SchemeParameters`](crate::SchemeParameters) live.
//!
//! The embedded 4096-bit group is parsed once, on first use of [`GroupParameters::global`].

use crate::{Error, SerializeBigUint};
use num_bigint::BigUint;
use num_traits::{Num, One};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, sync::Arc};

/// 4096-bit safe prime `p`, big-endian hex.
const SAFE_PRIME_HEX: &str = concat!(
    "c8526644a9c4739683742b7003640b2023ca42cc018a42b02a551bb825c6828f",
    "86e2e216ea5d31004c433582a3fa720459efb42e091d73fb281810e1825691f0",
    "799811be62ae57f62ab00670edd35426d108d3b9c4fd008eddc67275a0489fe1",
    "32e4c31bd7069ea7884cbb8f8f9255fe7b87fc0099f246776c340912df48f794",
    "5bc2bc0bc6814978d27b7af2ebc41f458ae795186db0fd7e6151bb8a7fe2b413",
    "70f7a2848ef75d3ec88f3439022c10e78b434c2f24b2f40bd02930e6c8aadef8",
    "7b0dc87cdba07dcfa86884a168bd1381a4f48be12e5d98e41f954c37aec011cc",
    "683570e8890418756ed98ace8c8e59ae1df50962c1622fe66b5409f330cad6b7",
    "c68f2e884786d9807190b89ac4a3b3507e49b2dd3f33d765ad29e2015180c8cd",
    "0258dd8bdaab17be5d74871fec04c492240c6a2692b2c9a62c9adbaac34a333f",
    "135801ff948e8dfb6bbd6212a67950fb8edd628d05d19d1b94e9be7c52ed4848",
    "31d50adaa29e71de197e351878f1c40ec67ee809e824124529e27bd5ecf3054f",
    "6784153f7db27ff0c87420bb2b2754ed363fc2ba8399d49d291f342173e76191",
    "83467a9694efa243e1d41b26c13b38ca0f43bb7c9050eb966461f28436583a9d",
    "13d2c1465b78184eae360f009505ccea288a053d111988d55c12befd882a857a",
    "530efac2c0592987cd83c39844a10e058739ab1c39006a3123e7fc887845675f",
);

/// 4095-bit Sophie Germain prime `q = (p - 1) / 2`, big-endian hex.
const SOPHIE_GERMAIN_PRIME_HEX: &str = concat!(
    "6429332254e239cb41ba15b801b2059011e5216600c52158152a8ddc12e34147",
    "c371710b752e988026219ac151fd39022cf7da17048eb9fd940c0870c12b48f8",
    "3ccc08df31572bfb1558033876e9aa13688469dce27e80476ee3393ad0244ff0",
    "9972618deb834f53c4265dc7c7c92aff3dc3fe004cf9233bb61a04896fa47bca",
    "2de15e05e340a4bc693dbd7975e20fa2c573ca8c36d87ebf30a8ddc53ff15a09",
    "b87bd142477bae9f64479a1c81160873c5a1a61792597a05e814987364556f7c",
    "3d86e43e6dd03ee7d4344250b45e89c0d27a45f0972ecc720fcaa61bd76008e6",
    "341ab87444820c3ab76cc56746472cd70efa84b160b117f335aa04f998656b5b",
    "e347974423c36cc038c85c4d6251d9a83f24d96e9f99ebb2d694f100a8c06466",
    "812c6ec5ed558bdf2eba438ff602624912063513495964d3164d6dd561a5199f",
    "89ac00ffca4746fdb5deb109533ca87dc76eb14682e8ce8dca74df3e2976a424",
    "18ea856d514f38ef0cbf1a8c3c78e207633f7404f412092294f13deaf67982a7",
    "b3c20a9fbed93ff8643a105d9593aa769b1fe15d41ccea4e948f9a10b9f3b0c8",
    "c1a33d4b4a77d121f0ea0d93609d9c6507a1ddbe482875cb3230f9421b2c1d4e",
    "89e960a32dbc0c27571b07804a82e6751445029e888cc46aae095f7ec41542bd",
    "29877d61602c94c3e6c1e1cc22508702c39cd58e1c80351891f3fe443c22b3af",
);

static GLOBAL: Lazy<Arc<GroupParameters>> = Lazy::new(|| {
    let group = GroupParameters::from_hex(SAFE_PRIME_HEX, SOPHIE_GERMAIN_PRIME_HEX)
        .unwrap_or_else(|err| panic!("failed to initialize embedded group parameters: {}", err));
    tracing::debug!(bits = group.p.bits(), "initialized embedded safe-prime group");
    Arc::new(group)
});

/// A safe prime `p` and the Sophie Germain prime `q` such that `p = 2q + 1`.
///
/// Primality of `p` and `q` is not tested; only the relation between them is checked on
/// construction. Group parameters are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGroupParameters")]
pub struct GroupParameters {
    #[serde(with = "SerializeBigUint")]
    p: BigUint,
    #[serde(with = "SerializeBigUint")]
    q: BigUint,
}

impl GroupParameters {
    /// The embedded 4096-bit group shared by the whole process.
    ///
    /// # Panics
    /// Panics on first use if the embedded constants are malformed. Nothing in this crate can
    /// run without them, so this is a startup fault rather than a recoverable error.
    pub fn global() -> Arc<GroupParameters> {
        Arc::clone(&GLOBAL)
    }

    /// Parse group parameters from hexadecimal strings, with or without a `0x` prefix.
    pub fn from_hex(p: &str, q: &str) -> Result<Self, Error> {
        let p = parse_hex(p).ok_or(Error::InvalidGroupParameters {
            reason: "p is not a hexadecimal integer",
        })?;
        let q = parse_hex(q).ok_or(Error::InvalidGroupParameters {
            reason: "q is not a hexadecimal integer",
        })?;
        Self::new(p, q)
    }

    /// Build group parameters from a safe prime `p` and its Sophie Germain prime `q`.
    pub fn new(p: BigUint, q: BigUint) -> Result<Self, Error> {
        if q <= BigUint::one() {
            return Err(Error::InvalidGroupParameters {
                reason: "q must be greater than one",
            });
        }
        if p != (&q << 1usize) + 1u32 {
            return Err(Error::InvalidGroupParameters {
                reason: "p must equal 2q + 1",
            });
        }
        Ok(Self { p, q })
    }

    /// The safe prime modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The order of the subgroup the generators live in.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// The cofactor `k = (p - 1) / q`. Always 2 for a safe prime.
    pub fn cofactor(&self) -> BigUint {
        (&self.p - 1u32) / &self.q
    }

    /// Check whether `x` is an element of the order-`q` subgroup modulo `p`.
    pub fn contains(&self, x: &BigUint) -> bool {
        *x > BigUint::from(0u32) && *x < self.p && x.modpow(&self.q, &self.p).is_one()
    }
}

fn parse_hex(s: &str) -> Option<BigUint> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    BigUint::from_str_radix(digits, 16).ok()
}

#[derive(Deserialize)]
struct UncheckedGroupParameters {
    #[serde(with = "SerializeBigUint")]
    p: BigUint,
    #[serde(with = "SerializeBigUint")]
    q: BigUint,
}

impl TryFrom<UncheckedGroupParameters> for GroupParameters {
    type Error = Error;

    fn try_from(unchecked: UncheckedGroupParameters) -> Result<Self, Self::Error> {
        Self::new(unchecked.p, unchecked.q)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// The safe prime 2039 = 2 * 1019 + 1.
    pub(crate) fn small_group() -> Arc<GroupParameters> {
        Arc::new(GroupParameters::from_hex("0x7f7", "0x3fb").unwrap())
    }

    #[test]
    fn embedded_group_is_well_formed() {
        let group = GroupParameters::global();
        assert_eq!(group.p().bits(), 4096);
        assert_eq!(group.q().bits(), 4095);
        assert_eq!(group.p(), &((group.q() << 1usize) + 1u32));
        assert_eq!(group.cofactor(), BigUint::from(2u32));
    }

    #[test]
    fn global_is_initialized_once() {
        assert!(Arc::ptr_eq(
            &GroupParameters::global(),
            &GroupParameters::global()
        ));
    }

    #[test]
    fn accepts_prefixed_and_bare_hex() {
        let prefixed = GroupParameters::from_hex("0x17", "0xb").unwrap();
        let bare = GroupParameters::from_hex("17", "B").unwrap();
        assert_eq!(prefixed, bare);
        assert_eq!(prefixed.p(), &BigUint::from(23u32));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(
            GroupParameters::from_hex("0xzz", "0xb"),
            Err(Error::InvalidGroupParameters { .. })
        ));
        assert!(matches!(
            GroupParameters::from_hex("0x17", ""),
            Err(Error::InvalidGroupParameters { .. })
        ));
    }

    #[test]
    fn rejects_unrelated_primes() {
        assert!(matches!(
            GroupParameters::from_hex("0x17", "0x7"),
            Err(Error::InvalidGroupParameters {
                reason: "p must equal 2q + 1"
            })
        ));
        assert!(GroupParameters::from_hex("0x3", "0x1").is_err());
    }

    #[test]
    fn subgroup_membership() {
        let group = small_group();
        let four = BigUint::from(4u32);
        assert!(group.contains(&four));
        assert!(group.contains(&BigUint::one()));
        assert!(!group.contains(&BigUint::from(0u32)));
        assert!(!group.contains(group.p()));
        // -1 has order 2, not q.
        assert!(!group.contains(&(group.p() - 1u32)));
    }

    #[test]
    fn deserialization_checks_relation() {
        let group = small_group();
        let bytes = bincode::serialize(&*group).unwrap();
        let decoded: GroupParameters = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, *group);

        let bogus = bincode::serialize(&(vec![23u8], vec![7u8])).unwrap();
        assert!(bincode::deserialize::<GroupParameters>(&bogus).is_err());
    }
}

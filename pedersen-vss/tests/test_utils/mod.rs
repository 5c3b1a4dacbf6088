use pedersen_vss::SchemeParameters;
use rand::SeedableRng;
use std::sync::Arc;

// Seeded rng for replicable tests.
pub fn seeded_rng() -> impl rand::CryptoRng + rand::RngCore {
    const TEST_RNG_SEED: [u8; 32] = *b"NEVER USE THIS FOR ANYTHING REAL";
    rand::rngs::StdRng::from_seed(TEST_RNG_SEED)
}

// Fresh parameters in the embedded group.
pub fn parameters(rng: &mut (impl rand::CryptoRng + rand::RngCore)) -> Arc<SchemeParameters> {
    Arc::new(SchemeParameters::generate(rng).expect("seeded rng does not fail"))
}

use pedersen_vss::{Commitment, DecommitmentKey, Rng, SchemeParameters};
use std::sync::Arc;

/// The committing party holds its secret and key until the reveal phase.
struct Committer {
    secret: Vec<u8>,
    decommitment_key: DecommitmentKey,
}

impl Committer {
    /// Commit to `secret` and return the encoded commitment to broadcast.
    pub fn new(
        rng: &mut impl Rng,
        params: &Arc<SchemeParameters>,
        secret: &[u8],
    ) -> (Self, Vec<u8>) {
        let (commitment, decommitment_key) = params
            .commit(rng, secret)
            .expect("randomness source failed");
        let broadcast = bincode::serialize(&commitment).expect("commitment encodes");
        (
            Self {
                secret: secret.to_vec(),
                decommitment_key,
            },
            broadcast,
        )
    }

    /// Reveal the secret and the encoded key that opens the commitment.
    pub fn reveal(self) -> (Vec<u8>, Vec<u8>) {
        let key = bincode::serialize(&self.decommitment_key).expect("key encodes");
        (self.secret, key)
    }
}

fn main() {
    let mut rng = rand::thread_rng();
    let params =
        Arc::new(SchemeParameters::generate(&mut rng).expect("randomness source failed"));

    // Commit phase: only the commitment leaves the committer.
    let (committer, broadcast) = Committer::new(&mut rng, &params, b"dealer share");
    let received: Commitment = bincode::deserialize(&broadcast).expect("commitment decodes");

    // Reveal phase.
    let (secret, key) = committer.reveal();
    let key: DecommitmentKey = bincode::deserialize(&key).expect("key decodes");

    assert!(received.verify(&key, &secret));
    assert!(!received.verify(&key, b"another share"));
}

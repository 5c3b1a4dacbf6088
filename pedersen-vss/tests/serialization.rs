mod test_utils;

use pedersen_vss::{Commitment, DecommitmentKey, Error, GroupParameters, SchemeParameters};

#[test]
fn commitment_verifies_after_transport() {
    let mut rng = test_utils::seeded_rng();
    let params = test_utils::parameters(&mut rng);
    let (commitment, key) = params.commit(&mut rng, b"hello").unwrap();

    let ser_commitment = bincode::serialize(&commitment).unwrap();
    let ser_key = bincode::serialize(&key).unwrap();

    let received: Commitment = bincode::deserialize(&ser_commitment).unwrap();
    let revealed: DecommitmentKey = bincode::deserialize(&ser_key).unwrap();

    assert_eq!(received, commitment);
    assert_eq!(revealed, key);
    assert!(received.verify(&revealed, b"hello"));
    assert!(!received.verify(&revealed, b"hellp"));
}

#[test]
fn parameters_outside_subgroup_are_rejected() {
    let mut rng = test_utils::seeded_rng();
    let params = test_utils::parameters(&mut rng);

    let mut bytes = bincode::serialize(&*params).unwrap();
    let h = params.h().to_bytes_be();
    let pos = (0..bytes.len() - h.len() + 1)
        .rev()
        .find(|&i| bytes[i..i + h.len()] == h[..])
        .unwrap();
    // Zero is never a group element.
    bytes[pos..pos + h.len()].iter_mut().for_each(|b| *b = 0);

    assert!(bincode::deserialize::<SchemeParameters>(&bytes).is_err());
}

// Encode parameters in the embedded group with arbitrary generator bytes.
fn encode_parameters(g: &[u8], h: &[u8]) -> Vec<u8> {
    bincode::serialize(&(&*GroupParameters::global(), g, h)).unwrap()
}

#[test]
fn parameters_with_identity_or_repeated_generator_are_rejected() {
    let mut rng = test_utils::seeded_rng();
    let params = test_utils::parameters(&mut rng);
    let g = params.g().to_bytes_be();
    let h = params.h().to_bytes_be();

    let identity_g = encode_parameters(&[1], &h);
    assert!(bincode::deserialize::<SchemeParameters>(&identity_g).is_err());

    let identity_h = encode_parameters(&g, &[1]);
    assert!(bincode::deserialize::<SchemeParameters>(&identity_h).is_err());

    let repeated = encode_parameters(&g, &g);
    assert!(bincode::deserialize::<SchemeParameters>(&repeated).is_err());

    // The same layout with honest generators decodes.
    let honest = encode_parameters(&g, &h);
    let decoded: SchemeParameters = bincode::deserialize(&honest).unwrap();
    assert_eq!(decoded, *params);
}

#[test]
fn commitment_under_identity_generator_is_rejected_on_receipt() {
    let mut rng = test_utils::seeded_rng();
    let params = test_utils::parameters(&mut rng);
    let (commitment, _) = params.commit(&mut rng, b"hello").unwrap();

    // A commitment whose parameters were swapped for g = 1 would open to any secret.
    let group = GroupParameters::global();
    let forged = bincode::serialize(&(
        (&*group, vec![1u8], params.h().to_bytes_be()),
        commitment.value().to_bytes_be(),
    ))
    .unwrap();
    assert!(bincode::deserialize::<Commitment>(&forged).is_err());

    assert!(matches!(
        SchemeParameters::from_generators(group, 1u32.into(), params.h().clone()),
        Err(Error::InvalidGenerator { name: "g", .. })
    ));
}

//! Property-based tests.

use classic_dsa::{
    generate_keys, random_in_range, sign, verify, BigUint, Error, KeySize, PrivateKey, PublicKey,
    Signature,
};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

prop_compose! {
    fn keypair()(seed in any::<[u8; 32]>()) -> (PublicKey, PrivateKey) {
        let mut rng = ChaCha8Rng::from_seed(seed);
        generate_keys(&mut rng, KeySize::new(64, 32).unwrap()).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_verify_round_trip(
        (public_key, private_key) in keypair(),
        message in any::<Vec<u8>>(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let signature = sign(&mut rng, &public_key, &private_key, &message).unwrap();

        prop_assert!(verify(&public_key, &signature, &message));
    }

    #[test]
    fn random_signatures_fail(
        (public_key, _) in keypair(),
        r in 1u64..,
        s in 1u64..,
    ) {
        let signature = Signature::from_components(BigUint::from(r), BigUint::from(s)).unwrap();

        // Forging a signature by chance is a 1 / q event
        prop_assert!(!verify(&public_key, &signature, b""));
    }

    #[test]
    fn range_draws_respect_bounds(begin in 0u64..1_000, width in 1u64..1_000_000, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (begin, end) = (BigUint::from(begin), BigUint::from(begin + width));
        let value = random_in_range(&mut rng, &begin, &end).unwrap();

        prop_assert!(value >= begin && value < end);
        prop_assert_eq!(random_in_range(&mut rng, &end, &begin), Err(Error::EmptyRange));
    }
}

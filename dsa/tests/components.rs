use classic_dsa::{
    generate_domain_parameters, generate_prime, is_probably_prime, BigUint, Components, Error,
    KeySize, MillerRabin,
};
use num_traits::{One, Zero};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn small_size() -> KeySize {
    KeySize::new(64, 32).unwrap()
}

#[test]
fn generated_primes_fit_byte_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);

    for length in 1..=8usize {
        let prime = generate_prime(&mut rng, length, &MillerRabin::BASE_TWO).unwrap();

        assert!(is_probably_prime(&prime));
        assert!(prime.bits() <= 8 * length as u64 - 1, "{prime} too wide for {length} bytes");
    }
}

#[test]
fn zero_byte_prime_is_refused() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    assert_eq!(
        generate_prime(&mut rng, 0, &MillerRabin::BASE_TWO),
        Err(Error::InvalidKeySize)
    );
}

#[test]
fn domain_parameters_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    for _ in 0..5 {
        let (p, q) = generate_domain_parameters(&mut rng, 8, 4, &MillerRabin::BASE_TWO).unwrap();

        assert!((&p - BigUint::one()) % &q == BigUint::zero());
        assert!(is_probably_prime(&p));
        assert!(is_probably_prime(&q));
        assert!(q < p);
    }
}

#[test]
fn domain_parameters_refuse_bad_sizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let tester = MillerRabin::BASE_TWO;

    assert_eq!(
        generate_domain_parameters(&mut rng, 8, 8, &tester),
        Err(Error::InvalidKeySize)
    );
    assert_eq!(
        generate_domain_parameters(&mut rng, 8, 0, &tester),
        Err(Error::InvalidKeySize)
    );
    assert_eq!(
        generate_domain_parameters(&mut rng, 4, 8, &tester),
        Err(Error::InvalidKeySize)
    );
}

#[test]
fn generator_has_order_q() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    let components = Components::generate(&mut rng, small_size()).unwrap();
    let (p, q, a) = (components.p(), components.q(), components.a());

    assert!(!a.is_one());
    assert!(*a < *p);
    assert!(a.modpow(q, p).is_one());
    assert!(components.is_valid());
}

#[test]
fn generate_with_stronger_tester() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let components =
        Components::generate_with(&mut rng, KeySize::new(128, 48).unwrap(), &MillerRabin::FIRST_PRIMES)
            .unwrap();

    assert!(MillerRabin::FIRST_PRIMES.test(components.p()));
    assert!(MillerRabin::FIRST_PRIMES.test(components.q()));
    assert!(components.is_valid());
}

#[test]
fn from_components_accepts_generated_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let components = Components::generate(&mut rng, small_size()).unwrap();

    let rebuilt = Components::from_components(
        components.p().clone(),
        components.q().clone(),
        components.a().clone(),
    )
    .unwrap();

    assert_eq!(components, rebuilt);
}

#[test]
fn from_components_rejects_broken_values() {
    let invalid = Err(Error::InvalidComponents);
    let n = |v: u32| BigUint::from(v);

    // 7 doesn't divide 22
    assert_eq!(Components::from_components(n(23), n(7), n(4)), invalid);
    // trivial generator
    assert_eq!(Components::from_components(n(23), n(11), n(1)), invalid);
    // generator outside the group
    assert_eq!(Components::from_components(n(23), n(11), n(27)), invalid);
    // 5 has order 22, not 11
    assert_eq!(Components::from_components(n(23), n(11), n(5)), invalid);
    // composite p: 25 - 1 = 24 = 3 * 8
    assert_eq!(Components::from_components(n(25), n(3), n(6)), invalid);

    assert!(Components::from_components(n(23), n(11), n(4)).is_ok());
}

use classic_dsa::{
    signature::{Keypair, RandomizedSigner, Verifier},
    Components, KeySize, SigningKey,
};
use rand_core::OsRng;

fn main() -> Result<(), classic_dsa::Error> {
    let mut rng = OsRng;
    let components = Components::generate(&mut rng, KeySize::DSA_1024_160)?;
    let signing_key = SigningKey::generate(&mut rng, components)?;
    let public_key = signing_key.verifying_key();

    let signature = signing_key.sign_with_rng(&mut rng, b"hello world");
    println!("r = {}", signature.r());
    println!("s = {}", signature.s());

    assert!(public_key.verify(b"hello world", &signature).is_ok());
    Ok(())
}

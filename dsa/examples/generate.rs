use classic_dsa::{Components, KeySize, SigningKey};
use rand_core::OsRng;

fn main() -> Result<(), classic_dsa::Error> {
    let mut rng = OsRng;
    let components = Components::generate(&mut rng, KeySize::DSA_1024_160)?;
    let signing_key = SigningKey::generate(&mut rng, components)?;
    let public_key = signing_key.public_key();

    println!("p = {}", public_key.components().p());
    println!("q = {}", public_key.components().q());
    println!("a = {}", public_key.components().a());
    println!("b = {}", public_key.b());

    Ok(())
}

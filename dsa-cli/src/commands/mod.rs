//! Subcommands of the `dsa` binary
//!
//! - `generate`: create domain parameters and a keypair
//! - `sign`: sign a message with a stored keypair
//! - `validate`: check a signed message file against a public key

pub mod generate;
pub mod sign;
pub mod validate;

use crate::{encoding, storage};
use anyhow::{Context, Result};
use classic_dsa::{PrivateKey, PublicKey};
use std::path::Path;

fn load_public_key(path: &Path) -> Result<PublicKey> {
    let file: encoding::PublicKeyFile = encoding::from_json(&storage::load(path)?, "public key")?;
    PublicKey::try_from(&file).with_context(|| format!("invalid public key in {}", path.display()))
}

fn load_private_key(path: &Path, public_key: &PublicKey) -> Result<PrivateKey> {
    let file: encoding::PrivateKeyFile =
        encoding::from_json(&storage::load(path)?, "private key")?;
    file.to_private_key(public_key.components())
        .with_context(|| format!("invalid private key in {}", path.display()))
}

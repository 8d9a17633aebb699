//! Signing command implementation

use super::{load_private_key, load_public_key};
use crate::{
    encoding::{self, SignedMessageFile},
    storage,
};
use anyhow::{Context, Result};
use classic_dsa::{signature::rand_core::CryptoRngCore, SigningKey};
use rand_core::OsRng;
use std::path::{Path, PathBuf};
use tracing::info;

/// File written for an output name: `<out_file>.json`
pub fn signed_path(out_file: &Path) -> PathBuf {
    storage::with_suffix(out_file, ".json")
}

/// Execute the sign command
pub fn execute(
    public_key_file: &Path,
    private_key_file: &Path,
    message: &str,
    out_file: Option<&Path>,
) -> Result<()> {
    sign_with_rng(&mut OsRng, public_key_file, private_key_file, message, out_file)
}

pub(crate) fn sign_with_rng(
    rng: &mut impl CryptoRngCore,
    public_key_file: &Path,
    private_key_file: &Path,
    message: &str,
    out_file: Option<&Path>,
) -> Result<()> {
    let public_key = load_public_key(public_key_file)?;
    let private_key = load_private_key(private_key_file, &public_key)?;
    let signing_key = SigningKey::from_components(public_key, private_key).with_context(|| {
        format!(
            "private key in {} does not belong to public key in {}",
            private_key_file.display(),
            public_key_file.display()
        )
    })?;

    let signature = classic_dsa::sign(
        rng,
        signing_key.public_key(),
        signing_key.private_key(),
        message.as_bytes(),
    )
    .context("signing failed")?;
    let json = encoding::to_json(&SignedMessageFile::new(&signature, message))?;

    match out_file {
        Some(out_file) => {
            let path = signed_path(out_file);
            storage::save(&path, &json)?;
            info!(path = %path.display(), "signed message written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Key generation command implementation

use crate::{
    encoding::{self, PrivateKeyFile, PublicKeyFile},
    storage,
};
use anyhow::{Context, Result};
use classic_dsa::{KeySize, PrivateKey, PublicKey};
use rand_core::OsRng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files written for an output prefix: `<prefix>_public.json`, `<prefix>_private.json`
pub fn key_paths(prefix: &Path) -> (PathBuf, PathBuf) {
    (
        storage::with_suffix(prefix, "_public.json"),
        storage::with_suffix(prefix, "_private.json"),
    )
}

/// Execute the generate command
pub fn execute(size: KeySize, output_prefix: Option<&Path>) -> Result<()> {
    info!(n = size.n(), l = size.l(), "generating domain parameters and keys");
    let (public_key, private_key) =
        classic_dsa::generate_keys(&mut OsRng, size).context("key generation failed")?;

    write_keys(&public_key, &private_key, output_prefix)
}

pub(crate) fn write_keys(
    public_key: &PublicKey,
    private_key: &PrivateKey,
    output_prefix: Option<&Path>,
) -> Result<()> {
    let public_json = encoding::to_json(&PublicKeyFile::from(public_key))?;
    let private_json = encoding::to_json(&PrivateKeyFile::from(private_key))?;

    match output_prefix {
        Some(prefix) => {
            let (public_path, private_path) = key_paths(prefix);
            storage::save(&public_path, &public_json)?;
            storage::save(&private_path, &private_json)?;

            info!(
                public = %public_path.display(),
                private = %private_path.display(),
                "keys written"
            );
        }
        None => {
            println!("Public Key:");
            println!("{public_json}");
            println!("Private Key:");
            println!("{private_json}");
        }
    }

    Ok(())
}

//! Validation command implementation

use super::load_public_key;
use crate::{
    encoding::{self, SignedMessageFile},
    storage,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Execute the validate command
///
/// Returns whether the signature is valid. Unreadable or malformed files are errors.
pub fn execute(signed_file: &Path, public_key_file: &Path) -> Result<bool> {
    let public_key = load_public_key(public_key_file)?;
    let signed: SignedMessageFile =
        encoding::from_json(&storage::load(signed_file)?, "signed message")?;

    let signature = signed
        .signature()
        .with_context(|| format!("invalid signature in {}", signed_file.display()))?;

    let Some(signature) = signature else {
        warn!("signature has a zero component");
        return Ok(false);
    };

    let valid = classic_dsa::verify(&public_key, &signature, signed.message.as_bytes());
    debug!(valid, "signature checked");

    Ok(valid)
}

//! JSON encoding of keys and signed messages
//!
//! Every integer is stored as a decimal string, so values of any size survive
//! the round trip through JSON.

use anyhow::{Context, Result};
use classic_dsa::{Components, PrivateKey, PublicKey, Signature};
use num_bigint::BigUint;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Public key as stored on disk: `{"p", "q", "a", "b"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyFile {
    pub p: String,
    pub q: String,
    pub a: String,
    pub b: String,
}

/// Private key as stored on disk: `{"d"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyFile {
    pub d: String,
}

/// Signature and the message it covers: `{"r", "s", "message"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessageFile {
    pub r: String,
    pub s: String,
    pub message: String,
}

impl From<&PublicKey> for PublicKeyFile {
    fn from(key: &PublicKey) -> Self {
        let components = key.components();
        Self {
            p: components.p().to_string(),
            q: components.q().to_string(),
            a: components.a().to_string(),
            b: key.b().to_string(),
        }
    }
}

impl From<&PrivateKey> for PrivateKeyFile {
    fn from(key: &PrivateKey) -> Self {
        Self {
            d: key.d().to_string(),
        }
    }
}

impl SignedMessageFile {
    pub fn new(signature: &Signature, message: &str) -> Self {
        Self {
            r: signature.r().to_string(),
            s: signature.s().to_string(),
            message: message.to_owned(),
        }
    }

    /// The signature, or `None` when r or s is zero
    pub fn signature(&self) -> Result<Option<Signature>> {
        let r = parse_integer("r", &self.r)?;
        let s = parse_integer("s", &self.s)?;

        Ok(Signature::from_components(r, s))
    }
}

impl TryFrom<&PublicKeyFile> for PublicKey {
    type Error = anyhow::Error;

    fn try_from(file: &PublicKeyFile) -> Result<Self> {
        let components = Components::from_components(
            parse_integer("p", &file.p)?,
            parse_integer("q", &file.q)?,
            parse_integer("a", &file.a)?,
        )
        .context("public key holds invalid domain parameters")?;

        PublicKey::from_components(components, parse_integer("b", &file.b)?)
            .context("public key component b is invalid")
    }
}

impl PrivateKeyFile {
    /// Decode the private exponent, checking it against the key's components
    pub fn to_private_key(&self, components: &Components) -> Result<PrivateKey> {
        PrivateKey::from_components(components, parse_integer("d", &self.d)?)
            .context("private key does not belong to these domain parameters")
    }
}

fn parse_integer(field: &str, value: &str) -> Result<BigUint> {
    value
        .trim()
        .parse()
        .with_context(|| format!("field `{field}` is not a non-negative decimal integer"))
}

/// Pretty-printed JSON, the layout the key files use
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to encode JSON")
}

pub fn from_json<T: DeserializeOwned>(data: &str, what: &str) -> Result<T> {
    serde_json::from_str(data).with_context(|| format!("malformed {what} JSON"))
}

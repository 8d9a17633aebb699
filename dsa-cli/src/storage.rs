//! Reading and writing UTF-8 key and message files

use anyhow::{Context, Result};
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

pub fn save(path: &Path, data: &str) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// `path` with `suffix` glued onto its last component (no separator added)
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

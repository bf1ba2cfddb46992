//! Host config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HostError, Result};

pub use schema::{DumpSection, HostConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<HostConfig> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<HostConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(HostConfig::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn load_from_str(s: &str) -> Result<HostConfig> {
    let cfg: HostConfig =
        serde_yaml::from_str(s).map_err(|e| HostError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

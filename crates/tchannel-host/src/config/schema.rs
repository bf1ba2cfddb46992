use serde::Deserialize;
use tchannel_core::ParseOptions;

use crate::error::{HostError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default)]
    pub parser: ParseOptions,

    #[serde(default)]
    pub dump: DumpSection,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            version: 1,
            parser: ParseOptions::default(),
            dump: DumpSection::default(),
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HostError::UnsupportedVersion(self.version));
        }
        self.dump.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpSection {
    /// Argument bytes shown per arg when logging a frame.
    #[serde(default = "default_preview_bytes")]
    pub preview_bytes: usize,
}

impl Default for DumpSection {
    fn default() -> Self {
        Self {
            preview_bytes: default_preview_bytes(),
        }
    }
}

impl DumpSection {
    pub fn validate(&self) -> Result<()> {
        if self.preview_bytes > 4096 {
            return Err(HostError::Config(
                "dump.preview_bytes must be between 0 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_preview_bytes() -> usize {
    32
}

//! Command line of the `tchannel-dump` binary.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::Result;

/// Decode raw TChannel frames from files and log them.
#[derive(Parser, Debug)]
#[command(name = "tchannel-dump", author, version, about, long_about = None)]
pub struct Args {
    /// Read each file as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// YAML config with parser options; missing file means defaults
    #[arg(short, long, default_value = "tchannel.yaml")]
    pub config: PathBuf,

    /// Files holding one complete frame each
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Read one frame file, decoding hex text when `hex_input` is set.
///
/// Whitespace between hex digits is ignored.
pub fn read_frame(path: &Path, hex_input: bool) -> Result<Vec<u8>> {
    if !hex_input {
        return Ok(fs::read(path)?);
    }
    let text = fs::read_to_string(path)?;
    let digits: String = text.split_whitespace().collect();
    Ok(hex::decode(digits)?)
}

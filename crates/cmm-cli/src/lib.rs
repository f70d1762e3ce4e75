//! Driver support for the `cmm` binary: source loading and output rendering.

pub mod render;

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Maximum source file size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

/// Reads a source file into memory, rejecting anything over
/// [`MAX_SOURCE_SIZE`].
pub fn load_source(path: &Path) -> Result<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file '{}'", path.display()))?;

    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

//! KiCad footprint output.

mod writer;

pub use writer::{encode_footprint, escape, fmt_num};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::pattern::Pattern;

/// File extension of KiCad footprint files.
pub const EXTENSION: &str = "kicad_mod";

/// Writes `<out_dir>/<name>.kicad_mod`, creating the directory if needed.
///
/// The file is encoded fully in memory and written in one call, so a failed
/// request leaves no partial output behind.
///
/// # Errors
///
/// Returns [`GenerateError::FileWrite`] if the directory or file cannot be
/// written.
pub fn write_footprint(pattern: &Pattern<'_>, out_dir: &Path) -> GenerateResult<PathBuf> {
    let content = encode_footprint(pattern);
    fs::create_dir_all(out_dir).map_err(|e| GenerateError::file_write(out_dir, e))?;
    let path = out_dir.join(format!("{}.{EXTENSION}", pattern.name()));
    fs::write(&path, content).map_err(|e| GenerateError::file_write(&path, e))?;
    debug!(path = %path.display(), "footprint written");
    Ok(path)
}

//! File output shared by the exporters.

use sandskrit_core::ExportResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes rendered output, creating missing parent directories.
pub fn write_file(path: &Path, contents: &str) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    info!("Saved {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

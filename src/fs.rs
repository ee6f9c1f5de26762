//! Saving translations to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(())
}

/// File name for a saved translation: `translation_<unix millis>.txt`.
pub fn timestamped_file_name(time: SystemTime) -> String {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("translation_{millis}.txt")
}

/// Saves a translation under `dir` with a timestamped name and returns the path.
pub fn save_translation(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join(timestamped_file_name(SystemTime::now()));
    atomic_write(&path, content)?;
    Ok(path)
}

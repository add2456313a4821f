//! Persistence of fetched translation files into the languages directory.
//!
//! Bodies are opaque blobs written verbatim; an existing file for the same
//! plugin/locale/format is overwritten (last writer wins).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::export_url::Format;

/// Relative target path under the languages directory:
/// `<project-name>-<locale>.<ext>`, e.g. `plugins/akismet-ja.po`.
pub fn target_path(project_name: &str, locale: &str, format: Format) -> PathBuf {
    PathBuf::from(format!("{}-{}.{}", project_name, locale, format.ext()))
}

/// Write `body` to `languages_dir/target`, creating parent directories as
/// needed. Returns the full path of the written file.
pub fn write_translation(
    languages_dir: &Path,
    target: &Path,
    body: &[u8],
) -> Result<PathBuf, ImportError> {
    let path = languages_dir.join(target);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ImportError::Write {
            path: path.clone(),
            source: e,
        })?;
    }
    fs::write(&path, body).map_err(|e| ImportError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

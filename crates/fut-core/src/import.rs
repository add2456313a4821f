//! Import orchestration: validate the trigger parameter, fetch both formats,
//! and return a notice list.
//!
//! Nothing here fails hard: every outcome becomes a notice for the caller's
//! display layer, and a failure on one format does not stop the other.

use std::path::Path;

use crate::error::ImportError;
use crate::export_url::{self, Format};
use crate::fetch::TranslationSource;
use crate::locales;
use crate::project::PluginFile;
use crate::store;

/// Outcome severity for one notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
}

/// One human-readable outcome line.
#[derive(Debug, Clone)]
pub struct Notice {
    pub status: NoticeStatus,
    pub message: String,
}

impl Notice {
    fn error(err: &ImportError) -> Self {
        Notice {
            status: NoticeStatus::Error,
            message: err.to_string(),
        }
    }

    fn success(message: String) -> Self {
        Notice {
            status: NoticeStatus::Success,
            message,
        }
    }
}

/// Everything an import needs besides the translation source.
#[derive(Debug, Clone)]
pub struct ImportRequest<'a> {
    /// Trigger parameter in `plugin-dir/plugin-file.php` form.
    pub plugin_file: &'a str,
    /// WordPress locale code, e.g. `de_DE`.
    pub locale: &'a str,
    /// Base URL of the GlotPress instance.
    pub base_url: &'a str,
    /// Project branch, e.g. `dev`.
    pub branch: &'a str,
    /// Directory translation files are stored under.
    pub languages_dir: &'a Path,
}

/// Run the full import: po and mo are fetched and stored independently, and
/// per-format errors are collected rather than aborting the request. Exactly
/// one success notice is produced when every step succeeded.
pub fn import_plugin(source: &dyn TranslationSource, req: &ImportRequest<'_>) -> Vec<Notice> {
    let mut notices = Vec::new();

    let plugin = match PluginFile::parse(req.plugin_file) {
        Ok(p) => p,
        Err(err) => {
            notices.push(Notice::error(&err));
            return notices;
        }
    };

    let locale_slug = match locales::glotpress_slug(req.locale) {
        Some(s) => s,
        None => {
            let err = ImportError::UnknownLocale(req.locale.to_string());
            notices.push(Notice::error(&err));
            return notices;
        }
    };

    for format in Format::ALL {
        if let Err(err) = import_one(source, req, &plugin, locale_slug, format) {
            tracing::warn!(%err, %format, "import step failed");
            notices.push(Notice::error(&err));
        }
    }

    if notices.is_empty() {
        notices.push(Notice::success(format!(
            "Translation files have been exported: {}",
            plugin.dir()
        )));
    }
    notices
}

fn import_one(
    source: &dyn TranslationSource,
    req: &ImportRequest<'_>,
    plugin: &PluginFile,
    locale_slug: &str,
    format: Format,
) -> Result<(), ImportError> {
    let url = export_url::export_url(
        req.base_url,
        &plugin.project_slug(),
        req.branch,
        locale_slug,
        format,
    )?;
    let body = source.fetch(url.as_str())?;
    let target = store::target_path(&plugin.project_name(), req.locale, format);
    let path = store::write_translation(req.languages_dir, &target, &body)?;
    tracing::info!(path = %path.display(), bytes = body.len(), "stored translation file");
    Ok(())
}

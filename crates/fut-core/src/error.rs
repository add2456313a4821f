//! Error kinds for the import pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single import step. The orchestration layer collects these
/// into notices instead of propagating them to the caller.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Trigger parameter does not look like `plugin-dir/plugin-file.php`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Locale has no known GlotPress slug.
    #[error("no GlotPress slug known for locale: {0}")]
    UnknownLocale(String),

    /// Configured base URL cannot be combined into an export URL.
    #[error("invalid base URL: {0}")]
    BadBaseUrl(String),

    /// Export endpoint unreachable, non-2xx, or served something other than
    /// a translation file (e.g. an HTML error page).
    #[error("cannot get source file: {url}")]
    SourceNotFound {
        url: String,
        #[source]
        source: Option<curl::Error>,
    },

    /// Languages-directory write failed (disk full, permission denied).
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

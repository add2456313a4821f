//! Plugin-file trigger parameter → GlotPress project identifiers.
//!
//! The trigger parameter is untrusted input; everything downstream (URL path
//! segments, output file names) is derived only from a validated match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ImportError;

/// Shape of the trigger parameter: `plugin-dir/plugin-file.php`.
static PLUGIN_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9_-]+)/([a-zA-Z0-9_.-]+\.php)$").expect("valid pattern"));

/// A validated `plugin-dir/plugin-file.php` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginFile {
    dir: String,
    file: String,
}

impl PluginFile {
    /// Validate a raw trigger parameter. Anything outside the fixed
    /// `dir/file.php` shape (e.g. `../../etc/passwd`) is rejected before any
    /// network or filesystem access happens.
    pub fn parse(raw: &str) -> Result<Self, ImportError> {
        let caps = PLUGIN_FILE_RE
            .captures(raw)
            .ok_or_else(|| ImportError::InvalidParameter(raw.to_string()))?;
        Ok(PluginFile {
            dir: caps[1].to_string(),
            file: caps[2].to_string(),
        })
    }

    /// Plugin directory (`akismet` in `akismet/akismet.php`).
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Main plugin file name (`akismet.php`).
    pub fn file(&self) -> &str {
        &self.file
    }

    /// GlotPress project slug: `wp-plugins/<dir>`.
    pub fn project_slug(&self) -> String {
        format!("wp-plugins/{}", self.dir)
    }

    /// Project slug with the `wp-` prefix stripped (`plugins/akismet`).
    /// Used as the relative target stem so files land under the languages
    /// `plugins/` subdirectory.
    pub fn project_name(&self) -> String {
        let slug = self.project_slug();
        slug.strip_prefix("wp-").unwrap_or(&slug).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_identifier() {
        let p = PluginFile::parse("akismet/akismet.php").unwrap();
        assert_eq!(p.dir(), "akismet");
        assert_eq!(p.file(), "akismet.php");
        assert_eq!(p.project_slug(), "wp-plugins/akismet");
        assert_eq!(p.project_name(), "plugins/akismet");
    }

    #[test]
    fn parses_dots_and_dashes_in_file() {
        let p = PluginFile::parse("my-plugin_2/my-plugin.v2.php").unwrap();
        assert_eq!(p.dir(), "my-plugin_2");
        assert_eq!(p.file(), "my-plugin.v2.php");
    }

    #[test]
    fn rejects_path_traversal() {
        for raw in ["../../etc/passwd", "a/../b.php", "/etc/passwd", "a//b.php"] {
            let err = PluginFile::parse(raw).unwrap_err();
            assert!(matches!(err, ImportError::InvalidParameter(_)), "{raw}");
        }
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(PluginFile::parse("akismet.php").is_err());
        assert!(PluginFile::parse("akismet/akismet.txt").is_err());
        assert!(PluginFile::parse("a/b/c.php").is_err());
        assert!(PluginFile::parse("").is_err());
    }
}

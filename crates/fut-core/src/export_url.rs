//! GlotPress export URL construction.

use std::fmt;

use url::Url;

use crate::error::ImportError;

/// Translation file format served by the export endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Po,
    Mo,
}

impl Format {
    /// Both formats fetched by an import, in order.
    pub const ALL: [Format; 2] = [Format::Po, Format::Mo];

    /// File extension; also the `format=` query value.
    pub fn ext(self) -> &'static str {
        match self {
            Format::Po => "po",
            Format::Mo => "mo",
        }
    }

    /// The service exports `po` when no `format=` parameter is given.
    fn is_service_default(self) -> bool {
        matches!(self, Format::Po)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

/// Statuses included in the export: everything translators have submitted,
/// not only strings that survived review.
const STATUS_FILTER: &str = "current_or_waiting_or_fuzzy";

/// Build the export URL for one (project, branch, locale slug, format):
/// `{base}/projects/{project}/{branch}/{slug}/default/export-translations`
/// with the status filter and, for non-default formats, `format=`.
///
/// All interpolated segments are escaped by the url crate.
pub fn export_url(
    base: &str,
    project: &str,
    branch: &str,
    locale_slug: &str,
    format: Format,
) -> Result<Url, ImportError> {
    let mut url =
        Url::parse(base).map_err(|_| ImportError::BadBaseUrl(base.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ImportError::BadBaseUrl(base.to_string()))?;
        segments.pop_if_empty();
        segments.push("projects");
        segments.extend(project.split('/'));
        segments.push(branch);
        segments.push(locale_slug);
        segments.push("default");
        segments.push("export-translations");
    }
    url.query_pairs_mut()
        .append_pair("filters[status]", STATUS_FILTER);
    if !format.is_service_default() {
        url.query_pairs_mut().append_pair("format", format.ext());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://translate.wordpress.org";

    #[test]
    fn builds_project_path() {
        let url = export_url(BASE, "wp-plugins/foo", "dev", "de", Format::Po).unwrap();
        assert!(url
            .as_str()
            .contains("projects/wp-plugins/foo/dev/de/default/export-translations"));
        assert_eq!(url.host_str(), Some("translate.wordpress.org"));
    }

    #[test]
    fn po_has_no_format_parameter() {
        let url = export_url(BASE, "wp-plugins/foo", "dev", "de", Format::Po).unwrap();
        assert!(!url.as_str().contains("format="));
        assert!(url
            .query()
            .unwrap()
            .contains("status%5D=current_or_waiting_or_fuzzy"));
    }

    #[test]
    fn mo_appends_format_parameter() {
        let url = export_url(BASE, "wp-plugins/foo", "dev", "de", Format::Mo).unwrap();
        assert!(url.as_str().ends_with("&format=mo"));
    }

    #[test]
    fn trailing_slash_base_is_normalized() {
        let url = export_url(
            "https://translate.wordpress.org/",
            "wp-plugins/foo",
            "dev",
            "ja",
            Format::Po,
        )
        .unwrap();
        assert!(url
            .path()
            .starts_with("/projects/wp-plugins/foo/dev/ja"));
    }

    #[test]
    fn segments_are_escaped() {
        // Not reachable through a validated PluginFile, but the builder must
        // never emit raw specials regardless of input.
        let url = export_url(BASE, "wp-plugins/a b", "dev", "de", Format::Po).unwrap();
        assert!(url.path().contains("/a%20b/"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let err = export_url("not a url", "wp-plugins/foo", "dev", "de", Format::Po).unwrap_err();
        assert!(matches!(err, ImportError::BadBaseUrl(_)));
        let err = export_url("mailto:x@example.com", "wp-plugins/foo", "dev", "de", Format::Po)
            .unwrap_err();
        assert!(matches!(err, ImportError::BadBaseUrl(_)));
    }

    #[test]
    fn format_display_matches_extension() {
        assert_eq!(Format::Po.to_string(), "po");
        assert_eq!(Format::Mo.to_string(), "mo");
        assert_eq!(Format::ALL, [Format::Po, Format::Mo]);
    }
}

//! HTTP fetch of a translation export.
//!
//! One blocking GET via the curl crate. The export endpoint serves real
//! translation files as `application/octet-stream`; anything else (notably an
//! HTML "project not found" page with a 200 status) is a failure.

use std::str;

use crate::error::ImportError;

/// Content type the export endpoint uses for actual file downloads.
const OCTET_STREAM: &str = "application/octet-stream";

/// Source of translation file bytes. The orchestration layer depends only on
/// this trait; tests substitute a canned source.
pub trait TranslationSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImportError>;
}

/// Production source: blocking GET against the live service. Follows
/// redirects; no custom headers, library-default timeouts.
#[derive(Debug, Default)]
pub struct HttpSource;

impl TranslationSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImportError> {
        let mut body: Vec<u8> = Vec::new();
        let mut header_lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| source_not_found(url, e))?;
        easy.follow_location(true)
            .map_err(|e| source_not_found(url, e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        header_lines.push(s.trim_end().to_string());
                    }
                    true
                })
                .map_err(|e| source_not_found(url, e))?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| source_not_found(url, e))?;
            transfer.perform().map_err(|e| source_not_found(url, e))?;
        }

        let code = easy
            .response_code()
            .map_err(|e| source_not_found(url, e))?;
        validate_response(code, content_type(&header_lines).as_deref(), url)?;
        Ok(body)
    }
}

fn source_not_found(url: &str, e: curl::Error) -> ImportError {
    ImportError::SourceNotFound {
        url: url.to_string(),
        source: Some(e),
    }
}

/// Last `Content-Type` seen; redirect chains report one header block per hop
/// and only the final hop's type matters.
fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                found = Some(value.trim().to_string());
            }
        }
    }
    found
}

/// A 2xx status is not enough: the declared content type must be the binary
/// stream marker, or the body is an error page rather than a translation file.
pub(crate) fn validate_response(
    code: u32,
    content_type: Option<&str>,
    url: &str,
) -> Result<(), ImportError> {
    if (200..300).contains(&code) && content_type == Some(OCTET_STREAM) {
        Ok(())
    } else {
        Err(ImportError::SourceNotFound {
            url: url.to_string(),
            source: None,
        })
    }
}

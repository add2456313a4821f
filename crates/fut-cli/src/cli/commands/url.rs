//! `fut url` – print the export URL without fetching.

use anyhow::Result;
use fut_core::config::FutConfig;
use fut_core::error::ImportError;
use fut_core::export_url::{export_url, Format};
use fut_core::locales;
use fut_core::project::PluginFile;

pub fn run_url(cfg: &FutConfig, plugin_file: &str, locale: &str, format: Format) -> Result<()> {
    let plugin = PluginFile::parse(plugin_file)?;
    let slug = locales::glotpress_slug(locale)
        .ok_or_else(|| ImportError::UnknownLocale(locale.to_string()))?;
    let url = export_url(&cfg.base_url, &plugin.project_slug(), &cfg.branch, slug, format)?;
    println!("{url}");
    Ok(())
}

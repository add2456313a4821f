//! `fut fetch` – run the full import pipeline and print notices.

use anyhow::Result;
use fut_core::config::FutConfig;
use fut_core::fetch::HttpSource;
use fut_core::import::{self, ImportRequest, NoticeStatus};
use std::path::PathBuf;

pub fn run_fetch(
    cfg: &FutConfig,
    plugin_file: &str,
    locale: &str,
    dir: Option<PathBuf>,
) -> Result<()> {
    let languages_dir = match dir.or_else(|| cfg.languages_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir()?,
    };

    let req = ImportRequest {
        plugin_file,
        locale,
        base_url: &cfg.base_url,
        branch: &cfg.branch,
        languages_dir: &languages_dir,
    };
    let notices = import::import_plugin(&HttpSource, &req);

    let mut failed = false;
    for notice in &notices {
        match notice.status {
            NoticeStatus::Success => println!("ok: {}", notice.message),
            NoticeStatus::Error => {
                failed = true;
                eprintln!("error: {}", notice.message);
            }
        }
    }
    if failed {
        anyhow::bail!("import finished with errors");
    }
    Ok(())
}

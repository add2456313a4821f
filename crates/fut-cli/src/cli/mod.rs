//! CLI for the fut translation fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fut_core::config;
use fut_core::export_url::Format;
use std::path::PathBuf;

use commands::{run_fetch, run_locales, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fut")]
#[command(
    about = "fut: force-download WordPress plugin translations from translate.wordpress.org",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Export format as a CLI value (fut-core stays clap-free).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Po,
    Mo,
}

impl From<ExportFormat> for Format {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Po => Format::Po,
            ExportFormat::Mo => Format::Mo,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a plugin's .po and .mo files into the languages directory.
    Fetch {
        /// Plugin identifier in `plugin-dir/plugin-file.php` form.
        plugin_file: String,

        /// WordPress locale code (e.g. de_DE, pt_BR, ja).
        #[arg(short, long)]
        locale: String,

        /// Languages directory (overrides config; defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print the export URL for a plugin without downloading anything.
    Url {
        /// Plugin identifier in `plugin-dir/plugin-file.php` form.
        plugin_file: String,

        /// WordPress locale code (e.g. de_DE, pt_BR, ja).
        #[arg(short, long)]
        locale: String,

        /// Export format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Po)]
        format: ExportFormat,
    },

    /// List known WordPress locales and their GlotPress slugs.
    Locales,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                plugin_file,
                locale,
                dir,
            } => run_fetch(&cfg, &plugin_file, &locale, dir)?,
            CliCommand::Url {
                plugin_file,
                locale,
                format,
            } => run_url(&cfg, &plugin_file, &locale, format.into())?,
            CliCommand::Locales => run_locales(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

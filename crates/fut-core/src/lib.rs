pub mod config;
pub mod logging;

pub mod error;
pub mod export_url;
pub mod fetch;
pub mod import;
pub mod locales;
pub mod project;
pub mod store;

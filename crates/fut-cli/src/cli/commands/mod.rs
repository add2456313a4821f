mod fetch;
mod locales;
mod url;

pub use fetch::run_fetch;
pub use locales::run_locales;
pub use url::run_url;

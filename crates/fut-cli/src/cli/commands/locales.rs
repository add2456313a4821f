//! `fut locales` – list known locale mappings.

use fut_core::locales;

pub fn run_locales() {
    println!("{:<12} {}", "WP LOCALE", "GLOTPRESS SLUG");
    for (wp_locale, slug) in locales::all() {
        println!("{:<12} {}", wp_locale, slug);
    }
}

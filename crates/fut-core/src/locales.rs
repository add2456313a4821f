//! WordPress locale code → GlotPress locale slug lookup.
//!
//! GlotPress identifies languages by its own slugs (`pt-br`, `zh-cn`), not by
//! WordPress locale codes (`pt_BR`, `zh_CN`). Read-only reference data
//! covering the locales active on translate.wordpress.org.

/// (WordPress locale, GlotPress slug), sorted by WordPress locale.
const WP_LOCALES: &[(&str, &str)] = &[
    ("af", "af"),
    ("am", "am"),
    ("ar", "ar"),
    ("ary", "ary"),
    ("as", "as"),
    ("az", "az"),
    ("azb", "azb"),
    ("bel", "bel"),
    ("bg_BG", "bg"),
    ("bn_BD", "bn"),
    ("bo", "bo"),
    ("bs_BA", "bs"),
    ("ca", "ca"),
    ("ceb", "ceb"),
    ("ckb", "ckb"),
    ("cs_CZ", "cs"),
    ("cy", "cy"),
    ("da_DK", "da"),
    ("de_AT", "de-at"),
    ("de_CH", "de-ch"),
    ("de_DE", "de"),
    ("dsb", "dsb"),
    ("dzo", "dzo"),
    ("el", "el"),
    ("en_AU", "en-au"),
    ("en_CA", "en-ca"),
    ("en_GB", "en-gb"),
    ("en_NZ", "en-nz"),
    ("en_ZA", "en-za"),
    ("eo", "eo"),
    ("es_AR", "es-ar"),
    ("es_CL", "es-cl"),
    ("es_CO", "es-co"),
    ("es_CR", "es-cr"),
    ("es_DO", "es-do"),
    ("es_EC", "es-ec"),
    ("es_ES", "es"),
    ("es_GT", "es-gt"),
    ("es_HN", "es-hn"),
    ("es_MX", "es-mx"),
    ("es_PE", "es-pe"),
    ("es_PR", "es-pr"),
    ("es_UY", "es-uy"),
    ("es_VE", "es-ve"),
    ("et", "et"),
    ("eu", "eu"),
    ("fa_AF", "fa-af"),
    ("fa_IR", "fa"),
    ("fi", "fi"),
    ("fr_BE", "fr-be"),
    ("fr_CA", "fr-ca"),
    ("fr_FR", "fr"),
    ("fur", "fur"),
    ("gd", "gd"),
    ("gl_ES", "gl"),
    ("gu", "gu"),
    ("haz", "haz"),
    ("he_IL", "he"),
    ("hi_IN", "hi"),
    ("hr", "hr"),
    ("hsb", "hsb"),
    ("hu_HU", "hu"),
    ("hy", "hy"),
    ("id_ID", "id"),
    ("is_IS", "is"),
    ("it_IT", "it"),
    ("ja", "ja"),
    ("jv_ID", "jv"),
    ("ka_GE", "ka"),
    ("kab", "kab"),
    ("kk", "kk"),
    ("km", "km"),
    ("kn", "kn"),
    ("ko_KR", "ko"),
    ("lo", "lo"),
    ("lt_LT", "lt"),
    ("lv", "lv"),
    ("mk_MK", "mk"),
    ("ml_IN", "ml"),
    ("mn", "mn"),
    ("mr", "mr"),
    ("ms_MY", "ms"),
    ("my_MM", "mya"),
    ("nb_NO", "nb"),
    ("ne_NP", "ne"),
    ("nl_BE", "nl-be"),
    ("nl_NL", "nl"),
    ("nn_NO", "nn"),
    ("oci", "oci"),
    ("pa_IN", "pa"),
    ("pl_PL", "pl"),
    ("ps", "ps"),
    ("pt_AO", "pt-ao"),
    ("pt_BR", "pt-br"),
    ("pt_PT", "pt"),
    ("rhg", "rhg"),
    ("ro_RO", "ro"),
    ("ru_RU", "ru"),
    ("sah", "sah"),
    ("si_LK", "si"),
    ("sk_SK", "sk"),
    ("skr", "skr"),
    ("sl_SI", "sl"),
    ("snd", "snd"),
    ("sq", "sq"),
    ("sr_RS", "sr"),
    ("sv_SE", "sv"),
    ("sw", "sw"),
    ("szl", "szl"),
    ("ta_IN", "ta"),
    ("ta_LK", "ta-lk"),
    ("te", "te"),
    ("th", "th"),
    ("tl", "tl"),
    ("tr_TR", "tr"),
    ("tt_RU", "tt"),
    ("ug_CN", "ug"),
    ("uk", "uk"),
    ("ur", "ur"),
    ("uz_UZ", "uz"),
    ("vi", "vi"),
    ("zh_CN", "zh-cn"),
    ("zh_HK", "zh-hk"),
    ("zh_TW", "zh-tw"),
];

/// Resolve a WordPress locale code to its GlotPress slug.
pub fn glotpress_slug(wp_locale: &str) -> Option<&'static str> {
    WP_LOCALES
        .binary_search_by_key(&wp_locale, |&(wp, _)| wp)
        .ok()
        .map(|i| WP_LOCALES[i].1)
}

/// All known (WordPress locale, GlotPress slug) pairs, in locale order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    WP_LOCALES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in WP_LOCALES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "{} must sort before {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn resolves_common_locales() {
        assert_eq!(glotpress_slug("de_DE"), Some("de"));
        assert_eq!(glotpress_slug("ja"), Some("ja"));
        assert_eq!(glotpress_slug("pt_BR"), Some("pt-br"));
        assert_eq!(glotpress_slug("zh_CN"), Some("zh-cn"));
        assert_eq!(glotpress_slug("my_MM"), Some("mya"));
    }

    #[test]
    fn unknown_locale_is_none() {
        assert_eq!(glotpress_slug("xx_XX"), None);
        assert_eq!(glotpress_slug(""), None);
        assert_eq!(glotpress_slug("de-DE"), None);
    }
}

//! Language code validation.
//!
//! A code is accepted when it is an ISO 639-1 code, one of the three-letter
//! ISO 639-3 codes MediaWiki ships a localisation for, or one of the
//! MediaWiki-specific codes that ISO does not cover (regional variants,
//! script variants, legacy Wikimedia codes). Codes are matched lowercase only.

use isolang::Language;

use crate::error::CoreError;

/// MediaWiki language codes outside ISO 639-1/639-3.
pub const MEDIAWIKI_EXTRA_CODES: &[&str] = &[
    "als",
    "bat-smg",
    "be-tarask",
    "be-x-old",
    "cbk-zam",
    "crh-cyrl",
    "crh-latn",
    "de-at",
    "de-ch",
    "de-formal",
    "en-ca",
    "en-gb",
    "es-formal",
    "fiu-vro",
    "gan-hans",
    "gan-hant",
    "hu-formal",
    "ike-cans",
    "ike-latn",
    "kk-arab",
    "kk-cn",
    "kk-cyrl",
    "kk-kz",
    "kk-latn",
    "kk-tr",
    "ku-arab",
    "ku-latn",
    "map-bms",
    "nds-nl",
    "nl-informal",
    "pt-br",
    "roa-rup",
    "roa-tara",
    "shi-latn",
    "shi-tfng",
    "sr-ec",
    "sr-el",
    "tg-cyrl",
    "tg-latn",
    "tt-cyrl",
    "tt-latn",
    "ug-arab",
    "ug-latn",
    "uz-cyrl",
    "uz-latn",
    "zh-classical",
    "zh-cn",
    "zh-hans",
    "zh-hant",
    "zh-hk",
    "zh-min-nan",
    "zh-mo",
    "zh-my",
    "zh-sg",
    "zh-tw",
    "zh-yue",
];

/// Three-letter codes MediaWiki knows. The remaining ISO 639-3 codes have
/// no localisation and cannot be a wiki's content language.
pub const MEDIAWIKI_THREE_LETTER_CODES: &[&str] = &[
    "ace", "ady", "aln", "alt", "ang", "anp", "arc", "arn", "arq", "ary", "arz", "ast",
    "atj", "avk", "awa", "azb", "bar", "bbc", "bcc", "bcl", "bew", "bgn", "bho", "bjn",
    "blk", "bpy", "bqi", "brh", "btm", "bto", "bug", "bxr", "cdo", "ceb", "chr", "chy",
    "ckb", "cps", "crh", "csb", "dag", "diq", "dsb", "dtp", "dty", "egl", "eml", "esu",
    "ext", "fat", "fit", "fkv", "fon", "frc", "frp", "frr", "fur", "gaa", "gag", "gan",
    "gcr", "gld", "glk", "gom", "gor", "got", "gpe", "gsw", "guc", "gur", "guw", "hak",
    "haw", "hif", "hil", "hrx", "hsb", "hsn", "hyw", "ibb", "igl", "ilo", "inh", "isv",
    "jam", "jbo", "jut", "kaa", "kab", "kbd", "kbp", "kcg", "kea", "kge", "khw", "kiu",
    "kjh", "kjp", "koi", "krc", "kri", "krj", "krl", "ksh", "ksw", "kum", "lad", "lbe",
    "lez", "lfn", "lij", "liv", "lki", "lld", "lmo", "loz", "lrc", "ltg", "lus", "luz",
    "lzh", "lzz", "mad", "mag", "mai", "mdf", "mhr", "min", "mni", "mnw", "mos", "mrh",
    "mrj", "mwl", "myv", "mzn", "nah", "nan", "nap", "nds", "new", "nia", "niu", "nod",
    "nov", "nqo", "nrm", "nso", "nyn", "nys", "olo", "ota", "pag", "pam", "pap", "pcd",
    "pcm", "pdc", "pdt", "pfl", "pih", "pis", "pms", "pnb", "pnt", "prg", "pwn", "quc",
    "qug", "rgn", "rif", "rmc", "rmy", "rsk", "rue", "rup", "ruq", "sah", "sat", "sdc",
    "sdh", "sei", "ses", "sgs", "shi", "shn", "shy", "sjd", "sje", "skr", "sli", "sma",
    "smn", "sms", "srn", "srq", "stq", "sty", "szl", "szy", "tay", "tcy", "tdd", "tet",
    "tly", "tpi", "tru", "trv", "trw", "tum", "tyv", "tzm", "udm", "uzs", "vec", "vep",
    "vls", "vmf", "vmw", "vot", "vro", "wal", "war", "wls", "wuu", "xal", "xmf", "xsy",
    "yrl", "yue", "zea", "zgh",
];

/// Whether `code` names a language the farm can be configured with.
pub fn is_known_language(code: &str) -> bool {
    if MEDIAWIKI_EXTRA_CODES.contains(&code) {
        return true;
    }
    if !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return false;
    }
    match code.len() {
        2 => Language::from_639_1(code).is_some(),
        3 => MEDIAWIKI_THREE_LETTER_CODES.binary_search(&code).is_ok(),
        _ => false,
    }
}

/// Reject unknown language codes with [`CoreError::InvalidLanguage`].
pub fn validate_language(code: &str) -> Result<(), CoreError> {
    if is_known_language(code) {
        Ok(())
    } else {
        Err(CoreError::InvalidLanguage(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_639_1_codes_are_known() {
        for code in ["en", "fi", "de", "ja", "pt"] {
            assert!(is_known_language(code), "{code} should be known");
        }
    }

    #[test]
    fn mediawiki_three_letter_codes_are_known() {
        for code in ["ast", "ceb", "nds", "yue", "szl"] {
            assert!(is_known_language(code), "{code} should be known");
        }
    }

    #[test]
    fn iso_639_3_codes_without_localisation_rejected() {
        // Valid ISO 639-3, but no wiki can be configured with them.
        assert!(Language::from_639_3("zzj").is_some());
        assert!(!is_known_language("zzj"));
        assert!(matches!(
            validate_language("zzj"),
            Err(CoreError::InvalidLanguage(ref c)) if c == "zzj"
        ));
    }

    #[test]
    fn three_letter_list_is_sorted_for_binary_search() {
        assert!(MEDIAWIKI_THREE_LETTER_CODES.windows(2).all(|w| w[0] < w[1]));
        assert!(MEDIAWIKI_THREE_LETTER_CODES.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn mediawiki_variants_are_known() {
        assert!(is_known_language("en-gb"));
        assert!(is_known_language("zh-hans"));
        assert!(is_known_language("be-tarask"));
    }

    #[test]
    fn unknown_codes_rejected() {
        assert!(!is_known_language("xx"));
        assert!(!is_known_language(""));
        assert!(!is_known_language("en-xx"));
        assert!(!is_known_language("english"));
    }

    #[test]
    fn uppercase_rejected() {
        assert!(!is_known_language("EN"));
        assert!(!is_known_language("Fi"));
    }

    #[test]
    fn validate_reports_code() {
        let err = validate_language("xx").unwrap_err();
        assert!(matches!(err, CoreError::InvalidLanguage(ref c) if c == "xx"));
    }
}

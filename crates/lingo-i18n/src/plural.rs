//! CLDR plural rules mapped to positional form indices.
//!
//! Each [`PluralRule`] maps an integer count to the index of the plural form
//! a message should use. Index `0` is the first standard segment of a message,
//! index `1` the second, and so on. The table follows the CLDR v24-era rules
//! as they were published for gettext-style catalogs, so the number and order
//! of segments a translator writes for a language is fixed by this module.
//!
//! # Invariants
//!
//! 1. Every `PluralRule` maps any `i64` to exactly one index.
//! 2. `index(n) < form_count()` for every rule and every `n`.
//! 3. Rules are pure functions: same count always yields same index.
//! 4. Unknown languages use [`PluralRule::Invariant`], which always yields `0`.

/// A language family sharing one plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// No plural distinction (Chinese, Japanese, Turkish, ...).
    Invariant,
    /// `0` for 1, `1` for everything else (English, German, Spanish, ...).
    OneOther,
    /// `0` for 0 and 1, `1` for everything else (French, Hindi, Brazilian Portuguese, ...).
    ZeroOneOther,
    /// Russian, Ukrainian, Belarusian, Croatian, Serbian, Bosnian.
    EastSlavic,
    /// Czech and Slovak: 1 / 2-4 / other.
    CzechSlovak,
    /// Irish: 1 / 2 / other.
    Irish,
    /// Lithuanian.
    Lithuanian,
    /// Slovenian: four forms keyed on the last two digits.
    Slovenian,
    /// Macedonian: anything ending in 1 / other.
    Macedonian,
    /// Maltese: four forms.
    Maltese,
    /// Latvian: zero / ends in 1 / other.
    Latvian,
    /// Polish.
    Polish,
    /// Welsh: 1 / 2 / 8 and 11 / other.
    Welsh,
    /// Romanian.
    Romanian,
    /// Arabic: six forms.
    Arabic,
}

impl PluralRule {
    /// Select the rule for a language or locale tag (`"en"`, `"pl_PL"`, `"pt_BR"`).
    ///
    /// Brazilian Portuguese is recognized before the territory is stripped,
    /// since it pluralizes like French rather than like European Portuguese.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        match normalize_language(tag) {
            "bo" | "dz" | "id" | "ja" | "jv" | "ka" | "km" | "kn" | "ko" | "ms" | "th" | "tr"
            | "vi" | "zh" => Self::Invariant,

            "af" | "az" | "bn" | "bg" | "ca" | "da" | "de" | "el" | "en" | "eo" | "es" | "et"
            | "eu" | "fa" | "fi" | "fo" | "fur" | "fy" | "gl" | "gu" | "ha" | "he" | "hu"
            | "is" | "it" | "ku" | "lb" | "ml" | "mn" | "mr" | "nah" | "nb" | "ne" | "nl"
            | "nn" | "no" | "om" | "or" | "pa" | "pap" | "ps" | "pt" | "so" | "sq" | "sv"
            | "sw" | "ta" | "te" | "tk" | "ur" | "zu" => Self::OneOther,

            "am" | "bh" | "fil" | "fr" | "gun" | "hi" | "ln" | "mg" | "nso" | BRAZILIAN
            | "ti" | "wa" => Self::ZeroOneOther,

            "be" | "bs" | "hr" | "ru" | "sr" | "uk" => Self::EastSlavic,
            "cs" | "sk" => Self::CzechSlovak,
            "ga" => Self::Irish,
            "lt" => Self::Lithuanian,
            "sl" => Self::Slovenian,
            "mk" => Self::Macedonian,
            "mt" => Self::Maltese,
            "lv" => Self::Latvian,
            "pl" => Self::Polish,
            "cy" => Self::Welsh,
            "ro" => Self::Romanian,
            "ar" => Self::Arabic,
            _ => Self::Invariant,
        }
    }

    /// Form index for `n`.
    ///
    /// Remainders keep the sign of `n`, so negative counts only reach the
    /// "ends in 1" style branches when a rule compares against a negative
    /// remainder (none do); they fall through to the last form instead.
    #[must_use]
    pub fn index(self, n: i64) -> usize {
        let m10 = n % 10;
        let m100 = n % 100;
        match self {
            Self::Invariant => 0,
            Self::OneOther => usize::from(n != 1),
            Self::ZeroOneOther => usize::from(n != 0 && n != 1),
            Self::EastSlavic => {
                if m10 == 1 && m100 != 11 {
                    0
                } else if (2..=4).contains(&m10) && !(10..20).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            Self::Lithuanian => {
                if m10 == 1 && m100 != 11 {
                    0
                } else if m10 >= 2 && !(10..20).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            Self::Slovenian => match m100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            Self::Macedonian => usize::from(m10 != 1),
            Self::Maltese => {
                if n == 1 {
                    0
                } else if n == 0 || (2..=10).contains(&m100) {
                    1
                } else if (11..=19).contains(&m100) {
                    2
                } else {
                    3
                }
            }
            Self::Latvian => {
                if n == 0 {
                    0
                } else if m10 == 1 && m100 != 11 {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            Self::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&m100) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                3..=10 => 3,
                11..=99 => 4,
                _ => 5,
            },
        }
    }

    /// Number of distinct forms this rule can select.
    #[must_use]
    pub const fn form_count(self) -> usize {
        match self {
            Self::Invariant => 1,
            Self::OneOther | Self::ZeroOneOther | Self::Macedonian => 2,
            Self::EastSlavic
            | Self::CzechSlovak
            | Self::Irish
            | Self::Lithuanian
            | Self::Latvian
            | Self::Polish
            | Self::Romanian => 3,
            Self::Slovenian | Self::Maltese | Self::Welsh => 4,
            Self::Arabic => 6,
        }
    }
}

/// Form index for `n` in `language`.
#[must_use]
pub fn category_index(language: &str, n: i64) -> usize {
    PluralRule::for_language(language).index(n)
}

const BRAZILIAN: &str = "xbr";

/// Reduce a tag to the key of the rule table.
///
/// `pt_BR` gets its own bucket; any tag longer than three characters loses
/// its last `_`/`-` separated suffix.
fn normalize_language(tag: &str) -> &str {
    if tag == "pt_BR" || tag == "pt-BR" {
        return BRAZILIAN;
    }
    if tag.len() > 3 {
        if let Some(cut) = tag.rfind(['_', '-']) {
            return &tag[..cut];
        }
    }
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(language: &str, counts: &[i64]) -> Vec<usize> {
        counts.iter().map(|&n| category_index(language, n)).collect()
    }

    #[test]
    fn english_family() {
        assert_eq!(indices("en", &[0, 1, 2, 5, 100]), [1, 0, 1, 1, 1]);
        assert_eq!(indices("en_US", &[1, 2]), [0, 1]);
        assert_eq!(indices("de", &[1, 11]), [0, 1]);
    }

    #[test]
    fn invariant_family() {
        assert_eq!(indices("ja", &[0, 1, 2, 1000]), [0, 0, 0, 0]);
        assert_eq!(indices("zh_CN", &[1, 2]), [0, 0]);
    }

    #[test]
    fn unknown_language_defaults_to_zero() {
        assert_eq!(indices("xx", &[0, 1, 2]), [0, 0, 0]);
        assert_eq!(indices("", &[1, 7]), [0, 0]);
    }

    #[test]
    fn brazilian_portuguese_differs_from_portuguese() {
        assert_eq!(indices("pt_BR", &[0, 1, 2]), [0, 0, 1]);
        assert_eq!(indices("pt-BR", &[0, 1, 2]), [0, 0, 1]);
        assert_eq!(indices("pt_PT", &[0, 1, 2]), [1, 0, 1]);
        assert_eq!(indices("pt", &[0, 1, 2]), [1, 0, 1]);
    }

    #[test]
    fn french_family() {
        assert_eq!(indices("fr", &[0, 1, 2]), [0, 0, 1]);
        assert_eq!(indices("fil_PH", &[0, 1, 2]), [0, 0, 1]);
    }

    #[test]
    fn east_slavic() {
        assert_eq!(
            indices("ru", &[1, 2, 4, 5, 11, 12, 14, 21, 22, 25, 111, 0]),
            [0, 1, 1, 2, 2, 2, 2, 0, 1, 2, 2, 2]
        );
        assert_eq!(indices("uk_UA", &[1, 3, 5]), [0, 1, 2]);
    }

    #[test]
    fn polish() {
        assert_eq!(
            indices("pl", &[1, 2, 3, 4, 5, 12, 13, 14, 22, 24, 25, 0, 21]),
            [0, 1, 1, 1, 2, 2, 2, 2, 1, 1, 2, 2, 2]
        );
    }

    #[test]
    fn arabic() {
        assert_eq!(
            indices("ar", &[0, 1, 2, 3, 10, 11, 99, 100, 102]),
            [0, 1, 2, 3, 3, 4, 4, 5, 5]
        );
    }

    #[test]
    fn czech_slovak_and_irish() {
        assert_eq!(indices("cs", &[1, 2, 4, 5, 0]), [0, 1, 1, 2, 2]);
        assert_eq!(indices("sk", &[22]), [2]);
        assert_eq!(indices("ga", &[1, 2, 3]), [0, 1, 2]);
    }

    #[test]
    fn baltic() {
        assert_eq!(indices("lt", &[1, 2, 9, 10, 11, 21, 22]), [0, 1, 1, 2, 2, 0, 1]);
        assert_eq!(indices("lv", &[0, 1, 11, 21, 2]), [0, 1, 2, 1, 2]);
    }

    #[test]
    fn slovenian_and_macedonian() {
        assert_eq!(indices("sl", &[1, 2, 3, 4, 5, 101, 102]), [0, 1, 2, 2, 3, 0, 1]);
        assert_eq!(indices("mk", &[1, 11, 21, 2]), [0, 0, 0, 1]);
    }

    #[test]
    fn maltese() {
        assert_eq!(
            indices("mt", &[1, 0, 2, 10, 11, 19, 20, 102]),
            [0, 1, 1, 1, 2, 2, 3, 1]
        );
    }

    #[test]
    fn welsh() {
        assert_eq!(indices("cy", &[1, 2, 8, 11, 3, 0]), [0, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn romanian() {
        assert_eq!(indices("ro", &[1, 0, 2, 19, 20, 101, 120]), [0, 1, 1, 1, 2, 1, 2]);
    }

    #[test]
    fn three_letter_codes_keep_their_bucket() {
        assert_eq!(indices("fur", &[1, 2]), [0, 1]);
        assert_eq!(indices("fil", &[0]), [0]);
        assert_eq!(indices("nah_MX", &[1, 2]), [0, 1]);
    }

    #[test]
    fn index_stays_below_form_count() {
        let langs = [
            "ja", "en", "fr", "ru", "cs", "ga", "lt", "sl", "mk", "mt", "lv", "pl", "cy", "ro",
            "ar",
        ];
        for lang in langs {
            let rule = PluralRule::for_language(lang);
            for n in -250..=250 {
                assert!(
                    rule.index(n) < rule.form_count(),
                    "{lang} n={n} index {} >= {}",
                    rule.index(n),
                    rule.form_count()
                );
            }
        }
    }
}

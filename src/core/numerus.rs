//! Plural form selection for `numerus="yes"` messages.
//!
//! Each language orders its `<numerusform>` entries the way Qt Linguist
//! does; [`NumerusRule::form_index`] maps a count onto that order.

/// Plural rule families used by Qt Linguist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumerusRule {
    /// One form for every count (Japanese, Chinese, Korean, ...).
    Single,
    /// Singular for exactly one (English, German, Spanish, ...).
    NotOne,
    /// Singular for zero and one (French, Brazilian Portuguese).
    GreaterThanOne,
    /// one / few / many, by last digits (Russian, Ukrainian, ...).
    EastSlavic,
    /// one / few / many with a singular only for exactly one.
    Polish,
    /// one / 2-4 / other (Czech, Slovak).
    CzechSlovak,
}

impl NumerusRule {
    /// Rule for a TS `language` attribute such as `ja`, `pt_BR` or `pt-BR`.
    pub fn for_language(code: &str) -> Self {
        let normalized = code.replace('-', "_");
        let lang = normalized.split('_').next().unwrap_or("").to_lowercase();

        match lang.as_str() {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" => Self::Single,
            "fr" => Self::GreaterThanOne,
            "pt" if normalized.eq_ignore_ascii_case("pt_BR") => Self::GreaterThanOne,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::CzechSlovak,
            _ => Self::NotOne,
        }
    }

    pub fn form_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::NotOne | Self::GreaterThanOne => 2,
            Self::EastSlavic | Self::Polish | Self::CzechSlovak => 3,
        }
    }

    pub fn form_index(&self, n: u64) -> usize {
        let (n10, n100) = (n % 10, n % 100);
        let few = (2..=4).contains(&n10) && !(12..=14).contains(&n100);
        match self {
            Self::Single => 0,
            Self::NotOne => usize::from(n != 1),
            Self::GreaterThanOne => usize::from(n > 1),
            Self::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if few {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if few {
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
        }
    }
}

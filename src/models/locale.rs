use serde::{Deserialize, Serialize};

/// The two site locales. Every text column exists once per locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Pick the field matching this locale.
    pub fn pick<'a>(&self, ar: &'a str, en: &'a str) -> &'a str {
        match self {
            Locale::Ar => ar,
            Locale::En => en,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        };
        write!(f, "{s}")
    }
}

//! Locale codes the catalog is published in.
//!
//! The allow-list is closed: every pre-generated document lives under a
//! directory named after one of these codes, and nothing else is served.

use super::errors::DomainError;
use lazy_static::lazy_static;
use std::{collections::HashSet, fmt, str::FromStr};

/// Supported locale codes in the order they are reported to clients.
pub const SUPPORTED_LANGUAGES: [&str; 28] = [
    "bg", "cs", "da", "de", "el", "en", "es-ES", "es-MX", "fi", "fr", "hu", "it", "ja", "ko",
    "nl", "no", "pl", "pt-BR", "pt-PT", "ro", "ru", "sv", "th", "tr", "uk", "vi", "zh-CN", "zh-TW",
];

lazy_static! {
    static ref LANGUAGE_SET: HashSet<&'static str> = SUPPORTED_LANGUAGES.iter().copied().collect();
}

/// A validated locale code. Construction goes through [`FromStr`], so holding
/// a `Language` means the code is on the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static str);

impl Language {
    pub fn code(&self) -> &'static str {
        self.0
    }

    /// Every supported language, in allow-list order.
    pub fn all() -> impl Iterator<Item = Language> {
        SUPPORTED_LANGUAGES.into_iter().map(Language)
    }
}

impl FromStr for Language {
    type Err = DomainError;

    /// Matching is exact and case-sensitive (`zh-CN`, not `zh-cn`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGE_SET
            .get(s)
            .map(|code| Language(*code))
            .ok_or_else(|| DomainError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

//! Supported display languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanthropeError;

/// Display language for labels and printable exports
///
/// Only labels depend on the locale; category keys and numbers never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French (default)
    #[default]
    Fr,
    /// English
    En,
}

impl Locale {
    /// All supported locales
    pub fn all() -> &'static [Self] {
        &[Self::Fr, Self::En]
    }

    /// The two-letter language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// The language name written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = FinanthropeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" | "français" => Ok(Self::Fr),
            "en" | "english" => Ok(Self::En),
            other => Err(FinanthropeError::UnknownLocale(other.to_string())),
        }
    }
}

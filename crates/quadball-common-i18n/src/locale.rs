// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A locale the site publishes in.
///
/// This is a closed set. English is the default and the terminal fallback of
/// every lookup chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Fr,
}

/// Locale used when no other signal is available.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales, default first.
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Fr];

/// Leading path segment that marks the alternate (French) URL tree.
pub const FR_PREFIX: &str = "/fr";

/// Returned when a tag is not one of [`SUPPORTED_LOCALES`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
	/// The BCP 47 language tag used in paths, `lang` attributes and records.
	pub fn as_str(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Fr => "fr",
		}
	}

	/// Regional tag for date and number formatting.
	pub fn intl_tag(self) -> &'static str {
		match self {
			Locale::En => "en-CA",
			Locale::Fr => "fr-CA",
		}
	}

	/// Parse an exact tag. Unknown tags yield `None`.
	pub fn parse(tag: &str) -> Option<Self> {
		match tag {
			"en" => Some(Locale::En),
			"fr" => Some(Locale::Fr),
			_ => None,
		}
	}

	pub fn is_default(self) -> bool {
		self == DEFAULT_LOCALE
	}

	/// The other supported locale.
	pub fn other(self) -> Self {
		match self {
			Locale::En => Locale::Fr,
			Locale::Fr => Locale::En,
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Locale {
	type Err = UnknownLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
	}
}

/// Check whether a tag names a supported locale.
pub fn is_supported(tag: &str) -> bool {
	Locale::parse(tag).is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_locale_is_english() {
		assert_eq!(DEFAULT_LOCALE, Locale::En);
		assert!(DEFAULT_LOCALE.is_default());
		assert!(!Locale::Fr.is_default());
	}

	#[test]
	fn test_supported_locales() {
		assert_eq!(SUPPORTED_LOCALES.len(), 2);
		assert!(SUPPORTED_LOCALES.contains(&Locale::En));
		assert!(SUPPORTED_LOCALES.contains(&Locale::Fr));
		assert_eq!(SUPPORTED_LOCALES[0], DEFAULT_LOCALE);
	}

	#[test]
	fn test_parse_is_exact() {
		assert_eq!(Locale::parse("en"), Some(Locale::En));
		assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
		assert_eq!(Locale::parse("FR"), None);
		assert_eq!(Locale::parse("de"), None);
		assert_eq!(Locale::parse(""), None);
		assert!(is_supported("fr"));
		assert!(!is_supported("fr-CA"));
	}

	#[test]
	fn test_from_str_error() {
		let err = "de".parse::<Locale>().unwrap_err();
		assert_eq!(err, UnknownLocale("de".to_string()));
		assert_eq!(err.to_string(), "unsupported locale 'de'");
	}

	#[test]
	fn test_other_is_involution() {
		for locale in SUPPORTED_LOCALES {
			assert_ne!(locale.other(), locale);
			assert_eq!(locale.other().other(), locale);
		}
	}

	#[test]
	fn test_display_and_intl_tag() {
		assert_eq!(Locale::Fr.to_string(), "fr");
		assert_eq!(Locale::En.intl_tag(), "en-CA");
		assert_eq!(Locale::Fr.intl_tag(), "fr-CA");
	}

	#[test]
	fn test_serde_lowercase() {
		assert_eq!(serde_json::to_string(&Locale::Fr).unwrap(), "\"fr\"");
		let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
		assert_eq!(parsed, Locale::En);
		assert!(serde_json::from_str::<Locale>("\"de\"").is_err());
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation configuration section.

use serde::{Deserialize, Serialize};

/// Filter directive that silences catalog fallback warnings.
pub const QUIET_CATALOG_DIRECTIVE: &str = "quadball_common_i18n::catalog=error";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub warn_missing_translations: Option<bool>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.warn_missing_translations.is_some() {
			self.warn_missing_translations = other.warn_missing_translations;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			warn_missing_translations: self.warn_missing_translations.unwrap_or(true),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	pub warn_missing_translations: bool,
}

impl I18nConfig {
	/// Extra log filter directive implied by this section, if any.
	pub fn log_directive(&self) -> Option<&'static str> {
		(!self.warn_missing_translations).then_some(QUIET_CATALOG_DIRECTIVE)
	}
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_warns_by_default() {
		let config = I18nConfig::default();
		assert!(config.warn_missing_translations);
		assert_eq!(config.log_directive(), None);
	}

	#[test]
	fn test_quiet_directive_when_disabled() {
		let config = I18nConfigLayer {
			warn_missing_translations: Some(false),
		}
		.finalize();
		assert_eq!(config.log_directive(), Some(QUIET_CATALOG_DIRECTIVE));
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = I18nConfigLayer {
			warn_missing_translations: Some(false),
		};
		base.merge(I18nConfigLayer::default());
		assert_eq!(base.warn_missing_translations, Some(false));
	}
}

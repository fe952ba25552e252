// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as read from a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{I18nConfigLayer, LoggingConfigLayer, SiteConfigLayer};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuadballConfigLayer {
	pub site: Option<SiteConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
	pub i18n: Option<I18nConfigLayer>,
}

impl QuadballConfigLayer {
	/// Overlay `other` onto `self`; fields set in `other` win.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.site, other.site, SiteConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	let Some(other) = other else {
		return;
	};
	match base {
		Some(existing) => merge(existing, other),
		None => *base = Some(other),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::LogFormat;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = QuadballConfigLayer::default();
		base.merge(QuadballConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
				format: None,
			}),
			..Default::default()
		});
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("debug"));
		assert!(base.site.is_none());
	}

	#[test]
	fn test_merge_is_field_wise() {
		let mut base = QuadballConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("warn".to_string()),
				format: Some(LogFormat::Json),
			}),
			..Default::default()
		};
		base.merge(QuadballConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("trace".to_string()),
				format: None,
			}),
			..Default::default()
		});
		let logging = base.logging.unwrap();
		assert_eq!(logging.level.as_deref(), Some("trace"));
		assert_eq!(logging.format, Some(LogFormat::Json));
	}

	#[test]
	fn test_deserialize_full_file() {
		let layer: QuadballConfigLayer = toml::from_str(
			r#"
[site]
base_url = "https://quadballcanada.ca"

[logging]
format = "json"

[i18n]
warn_missing_translations = false
"#,
		)
		.unwrap();
		assert_eq!(
			layer.site.unwrap().base_url.as_deref(),
			Some("https://quadballcanada.ca")
		);
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Json));
		assert_eq!(layer.i18n.unwrap().warn_missing_translations, Some(false));
	}
}

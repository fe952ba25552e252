// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Data for the header language switcher.

use serde::Serialize;

use crate::infer::infer_locale;
use crate::locale::{Locale, SUPPORTED_LOCALES};
use crate::switch::{switch_locale_path, AlternateUrls};

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchLink {
	pub locale: Locale,
	/// Short uppercase label, e.g. `EN`.
	pub label: &'static str,
	pub href: String,
	/// Set on the locale of the page being rendered.
	pub is_current: bool,
}

/// Switcher entries for every supported locale, default first.
pub fn switcher_links(current_path: &str, alternate: Option<&AlternateUrls>) -> [SwitchLink; 2] {
	let current = infer_locale(Some(current_path));
	SUPPORTED_LOCALES.map(|locale| SwitchLink {
		locale,
		label: match locale {
			Locale::En => "EN",
			Locale::Fr => "FR",
		},
		href: switch_locale_path(current_path, locale, alternate),
		is_current: locale == current,
	})
}

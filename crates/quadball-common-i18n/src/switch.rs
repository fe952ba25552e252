// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! "Switch to locale X" link computation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::alternate::alternate_path;
use crate::locale::Locale;
use crate::localized::LocalizedValue;
use crate::path::normalize_path;

/// Author-supplied replacement URLs, per locale, for the current page.
pub type AlternateUrls = LocalizedValue<String>;

static ABSOLUTE_URL: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z\d+\-.]*://").unwrap());

/// Whether `url` has a scheme (`https://...`) or is protocol-relative (`//...`).
pub fn is_absolute_url(url: &str) -> bool {
	url.starts_with("//") || ABSOLUTE_URL.is_match(url)
}

/// URL of the current page in `target`.
///
/// A non-empty override for `target` wins. Absolute and protocol-relative
/// overrides are returned verbatim; site-relative ones have their path part
/// normalized while any `?query` or `#fragment` tail is kept as written.
/// Without an override the path is mapped with [`alternate_path`].
///
/// ```
/// use quadball_common_i18n::{switch_locale_path, AlternateUrls, Locale};
///
/// let alternate = AlternateUrls::new(None, Some("/fr/a-propos?ref=1".to_string()));
/// assert_eq!(switch_locale_path("/about", Locale::Fr, Some(&alternate)), "/fr/a-propos/?ref=1");
/// assert_eq!(switch_locale_path("/fr/nouvelles/", Locale::En, Some(&alternate)), "/nouvelles/");
/// ```
pub fn switch_locale_path(
	current_path: &str,
	target: Locale,
	alternate: Option<&AlternateUrls>,
) -> String {
	let Some(alt) = alternate
		.and_then(|urls| urls.get(target))
		.filter(|url| !url.is_empty())
	else {
		return alternate_path(current_path, target);
	};

	if is_absolute_url(alt) {
		return alt.clone();
	}

	let (path_part, tail) = match alt.find(['?', '#']) {
		Some(idx) => alt.split_at(idx),
		None => (alt.as_str(), ""),
	};
	format!("{}{tail}", normalize_path(Some(path_part)))
}

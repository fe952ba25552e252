// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mapping a path between the English and French URL trees.

use crate::infer::is_alternate_path;
use crate::locale::{Locale, FR_PREFIX};
use crate::path::{collapse_slashes, normalize_path};

/// Compute the path of `current_path` in the `target` locale's tree.
///
/// The result is always normalized. Targeting the locale the path is already
/// in returns it unchanged, and switching away and back returns the
/// normalized original.
///
/// ```
/// use quadball_common_i18n::{alternate_path, Locale};
///
/// assert_eq!(alternate_path("/", Locale::Fr), "/fr/");
/// assert_eq!(alternate_path("/about/meet-the-board/", Locale::Fr), "/fr/about/meet-the-board/");
/// assert_eq!(alternate_path("/fr/nouvelles/", Locale::En), "/nouvelles/");
/// ```
pub fn alternate_path(current_path: &str, target: Locale) -> String {
	let normalized = normalize_path(Some(current_path));
	let is_french = is_alternate_path(&normalized);

	match target {
		Locale::Fr => {
			if is_french {
				normalized
			} else if normalized == "/" {
				format!("{FR_PREFIX}/")
			} else {
				collapse_slashes(&format!("{FR_PREFIX}{normalized}"))
			}
		}
		Locale::En => {
			if !is_french {
				return normalized;
			}
			// `normalized` is `/fr/...`; the remainder keeps its leading slash.
			let remainder = &normalized[FR_PREFIX.len()..];
			if remainder.is_empty() {
				"/".to_string()
			} else {
				remainder.to_string()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::infer::infer_locale;
	use proptest::prelude::*;

	#[test]
	fn test_root_mapping() {
		assert_eq!(alternate_path("/", Locale::Fr), "/fr/");
		assert_eq!(alternate_path("", Locale::Fr), "/fr/");
		assert_eq!(alternate_path("/fr/", Locale::En), "/");
		assert_eq!(alternate_path("/fr", Locale::En), "/");
	}

	#[test]
	fn test_english_to_french() {
		assert_eq!(alternate_path("/news/", Locale::Fr), "/fr/news/");
		assert_eq!(alternate_path("/about/", Locale::Fr), "/fr/about/");
		assert_eq!(alternate_path("/news", Locale::Fr), "/fr/news/");
		assert_eq!(
			alternate_path("/about/meet-the-board/", Locale::Fr),
			"/fr/about/meet-the-board/"
		);
	}

	#[test]
	fn test_french_to_english() {
		assert_eq!(alternate_path("/fr/nouvelles/", Locale::En), "/nouvelles/");
		assert_eq!(alternate_path("/fr/a-propos/", Locale::En), "/a-propos/");
	}

	#[test]
	fn test_same_locale_is_unchanged() {
		assert_eq!(alternate_path("/news/", Locale::En), "/news/");
		assert_eq!(alternate_path("/fr/nouvelles/", Locale::Fr), "/fr/nouvelles/");
		assert_eq!(alternate_path("/fr", Locale::Fr), "/fr/");
	}

	#[test]
	fn test_prefixing_collapses_double_slashes() {
		assert_eq!(alternate_path("//news/", Locale::Fr), "/fr/news/");
	}

	#[test]
	fn test_lookalike_segment_is_treated_as_english() {
		assert_eq!(alternate_path("/francais/", Locale::Fr), "/fr/francais/");
		assert_eq!(alternate_path("/francais/", Locale::En), "/francais/");
	}

	fn segment() -> impl Strategy<Value = String> {
		"[a-z0-9][a-z0-9-]{0,11}"
	}

	fn english_path() -> impl Strategy<Value = String> {
		prop::collection::vec(segment(), 0..4)
			.prop_filter("first segment must not be the French prefix", |segs| {
				segs.first().map(|s| s != "fr").unwrap_or(true)
			})
			.prop_map(|segs| {
				if segs.is_empty() {
					"/".to_string()
				} else {
					format!("/{}/", segs.join("/"))
				}
			})
	}

	proptest! {
		/// Targeting a path's own locale is a no-op.
		#[test]
		fn own_locale_is_identity(path in english_path()) {
			prop_assert_eq!(alternate_path(&path, Locale::En), path.clone());
			let french = alternate_path(&path, Locale::Fr);
			prop_assert_eq!(alternate_path(&french, Locale::Fr), french.clone());
		}

		/// English → French → English returns the original path.
		#[test]
		fn english_round_trip(path in english_path()) {
			let french = alternate_path(&path, Locale::Fr);
			prop_assert_eq!(infer_locale(Some(&french)), Locale::Fr);
			prop_assert_eq!(alternate_path(&french, Locale::En), path);
		}

		/// French → English → French returns the original path.
		#[test]
		fn french_round_trip(path in english_path()) {
			let french = alternate_path(&path, Locale::Fr);
			let english = alternate_path(&french, Locale::En);
			prop_assert_eq!(alternate_path(&english, Locale::Fr), french);
		}

		/// Un-normalized input round-trips to its normalized form.
		#[test]
		fn round_trip_normalizes(segs in prop::collection::vec(segment(), 1..4)) {
			prop_assume!(segs[0] != "fr");
			let raw = segs.join("/");
			let expected = normalize_path(Some(&raw));
			let there = alternate_path(&raw, Locale::Fr);
			prop_assert_eq!(alternate_path(&there, Locale::En), expected);
		}
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale inference from the URL tree a path belongs to.

use crate::locale::{Locale, DEFAULT_LOCALE, FR_PREFIX};
use crate::path::normalize_path;

/// Whether an already-normalized path lies in the French tree.
///
/// This is a whole-segment prefix test: `/fr/` and `/fr/...` match,
/// `/francais/` and `/news/fr/` do not.
pub fn is_alternate_path(normalized: &str) -> bool {
	normalized
		.strip_prefix(FR_PREFIX)
		.is_some_and(|rest| rest.starts_with('/'))
}

/// Infer the locale of a path. Absent or empty paths are the default locale.
pub fn infer_locale(path: Option<&str>) -> Locale {
	match path {
		None | Some("") => DEFAULT_LOCALE,
		Some(p) => {
			if is_alternate_path(&normalize_path(Some(p))) {
				Locale::Fr
			} else {
				DEFAULT_LOCALE
			}
		}
	}
}

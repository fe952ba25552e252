// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page paths built from per-locale slug records.

use crate::locale::Locale;
use crate::localized::LocalizedValue;
use crate::path::normalize_path;

/// Build the path for a record of plain per-locale slugs.
///
/// Picks the slug for `locale`, else for `fallback`, and wraps it in slashes.
/// Returns `None` for an absent record or when no non-empty slug exists.
pub fn localized_path(
	slugs: Option<&LocalizedValue<String>>,
	locale: Locale,
	fallback: Locale,
) -> Option<String> {
	let preferred = slugs?.pick(locale, fallback)?;
	if preferred.is_empty() {
		return None;
	}
	Some(normalize_path(Some(preferred)))
}

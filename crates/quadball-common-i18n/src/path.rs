// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site-relative path normalization.
//!
//! A normalized path starts and ends with `/`. The empty path is the root.
//! Repeated internal slashes are left alone here; code that builds paths by
//! concatenation collapses them with [`collapse_slashes`].

/// Normalize a path to its canonical form.
///
/// `None` and `""` map to `/`. A missing leading slash is prepended and a
/// missing trailing slash appended.
pub fn normalize_path(path: Option<&str>) -> String {
	match path {
		None | Some("") => "/".to_string(),
		Some(p) => ensure_trailing_slash(&ensure_leading_slash(p)),
	}
}

pub fn ensure_leading_slash(path: &str) -> String {
	if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{path}")
	}
}

/// Append a trailing slash if missing. The empty string becomes `/`.
pub fn ensure_trailing_slash(path: &str) -> String {
	if path.is_empty() {
		return "/".to_string();
	}
	if path.ends_with('/') {
		path.to_string()
	} else {
		format!("{path}/")
	}
}

/// Replace every run of two or more `/` with a single `/`.
pub fn collapse_slashes(path: &str) -> String {
	let mut out = String::with_capacity(path.len());
	let mut prev_slash = false;
	for c in path.chars() {
		if c == '/' {
			if !prev_slash {
				out.push(c);
			}
			prev_slash = true;
		} else {
			out.push(c);
			prev_slash = false;
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_empty_and_absent_are_root() {
		assert_eq!(normalize_path(None), "/");
		assert_eq!(normalize_path(Some("")), "/");
		assert_eq!(normalize_path(Some("/")), "/");
	}

	#[test]
	fn test_adds_missing_slashes() {
		assert_eq!(normalize_path(Some("news")), "/news/");
		assert_eq!(normalize_path(Some("/news")), "/news/");
		assert_eq!(normalize_path(Some("news/")), "/news/");
		assert_eq!(normalize_path(Some("about/team")), "/about/team/");
	}

	#[test]
	fn test_internal_slashes_are_preserved() {
		assert_eq!(normalize_path(Some("/a//b")), "/a//b/");
	}

	#[test]
	fn test_ensure_leading_slash() {
		assert_eq!(ensure_leading_slash("news"), "/news");
		assert_eq!(ensure_leading_slash("/about/team"), "/about/team");
	}

	#[test]
	fn test_ensure_trailing_slash() {
		assert_eq!(ensure_trailing_slash("/news"), "/news/");
		assert_eq!(ensure_trailing_slash("/about/team/"), "/about/team/");
		assert_eq!(ensure_trailing_slash(""), "/");
	}

	#[test]
	fn test_collapse_slashes() {
		assert_eq!(collapse_slashes("/fr//news/"), "/fr/news/");
		assert_eq!(collapse_slashes("///"), "/");
		assert_eq!(collapse_slashes("/a/b/"), "/a/b/");
	}

	proptest! {
		/// Normalized paths always start and end with a slash.
		#[test]
		fn normalized_paths_are_slash_wrapped(path in "[a-z0-9/_-]{0,24}") {
			let normalized = normalize_path(Some(&path));
			prop_assert!(normalized.starts_with('/'));
			prop_assert!(normalized.ends_with('/'));
		}

		/// Normalizing twice is the same as normalizing once.
		#[test]
		fn normalize_is_idempotent(path in "[a-z0-9/_-]{0,24}") {
			let once = normalize_path(Some(&path));
			prop_assert_eq!(normalize_path(Some(&once)), once.clone());
		}

		/// Collapsed paths never contain `//`.
		#[test]
		fn collapsed_paths_have_no_double_slash(path in "[a-z/]{0,32}") {
			prop_assert!(!collapse_slashes(&path).contains("//"));
		}
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-locale values with default-locale fallback.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, DEFAULT_LOCALE};

/// The same logical value in each supported locale. Every entry is optional.
///
/// Serializes as `{"en": ..., "fr": ...}` with absent entries omitted, which
/// is the shape content records use for localized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedValue<T> {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub en: Option<T>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fr: Option<T>,
}

impl<T> Default for LocalizedValue<T> {
	fn default() -> Self {
		Self { en: None, fr: None }
	}
}

impl<T> LocalizedValue<T> {
	pub fn new(en: Option<T>, fr: Option<T>) -> Self {
		Self { en, fr }
	}

	pub fn get(&self, locale: Locale) -> Option<&T> {
		match locale {
			Locale::En => self.en.as_ref(),
			Locale::Fr => self.fr.as_ref(),
		}
	}

	/// Set the entry for `locale`, returning the previous one.
	pub fn insert(&mut self, locale: Locale, value: T) -> Option<T> {
		let slot = match locale {
			Locale::En => &mut self.en,
			Locale::Fr => &mut self.fr,
		};
		slot.replace(value)
	}

	pub fn is_empty(&self) -> bool {
		self.en.is_none() && self.fr.is_none()
	}

	/// Entry for `locale`, else the entry for `fallback`.
	pub fn pick(&self, locale: Locale, fallback: Locale) -> Option<&T> {
		self.get(locale).or_else(|| self.get(fallback))
	}
}

/// A content-store slug object. Stores occasionally emit the object without
/// its `current` field, so it is optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugValue {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub current: Option<String>,
}

impl SlugValue {
	pub fn new(current: impl Into<String>) -> Self {
		Self {
			current: Some(current.into()),
		}
	}
}

/// Look up `locale` in `value`, falling back to `fallback`.
///
/// Returns `None` when the record is absent or neither entry exists.
pub fn pick<T>(value: Option<&LocalizedValue<T>>, locale: Locale, fallback: Locale) -> Option<&T> {
	value?.pick(locale, fallback)
}

/// [`pick`] for strings, collapsing "no value" to `""`.
pub fn pick_string(
	value: Option<&LocalizedValue<String>>,
	locale: Locale,
	fallback: Locale,
) -> String {
	pick(value, locale, fallback).cloned().unwrap_or_default()
}

/// The raw slug for `locale` out of a record of slug objects, or `""`.
///
/// Fallback picks the slug *object*: a present object without `current`
/// yields `""` rather than consulting the fallback locale.
pub fn pick_slug(value: Option<&LocalizedValue<SlugValue>>, locale: Locale, fallback: Locale) -> String {
	pick(value, locale, fallback)
		.and_then(|slug| slug.current.clone())
		.unwrap_or_default()
}

impl LocalizedValue<String> {
	/// Shorthand for [`pick_string`] with the default fallback.
	pub fn text(&self, locale: Locale) -> String {
		pick_string(Some(self), locale, DEFAULT_LOCALE)
	}
}

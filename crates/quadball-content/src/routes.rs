// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site sections and the paths their pages live at in each locale.

use std::fmt;
use std::str::FromStr;

use quadball_common_i18n::{collapse_slashes, AlternateUrls, Locale, FR_PREFIX};
use serde::Serialize;

use crate::query::ContentQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
	Home,
	News,
	Events,
	Resources,
	Teams,
	About,
}

impl Section {
	pub const ALL: [Section; 6] = [
		Section::Home,
		Section::News,
		Section::Events,
		Section::Resources,
		Section::Teams,
		Section::About,
	];

	/// The section's path segment in `locale`; empty for the home page.
	pub fn segment(self, locale: Locale) -> &'static str {
		match (self, locale) {
			(Section::Home, _) => "",
			(Section::News, Locale::En) => "news",
			(Section::News, Locale::Fr) => "nouvelles",
			(Section::Events, Locale::En) => "events",
			(Section::Events, Locale::Fr) => "evenements",
			(Section::Resources, Locale::En) => "resources",
			(Section::Resources, Locale::Fr) => "ressources",
			(Section::Teams, Locale::En) => "teams",
			(Section::Teams, Locale::Fr) => "equipes",
			(Section::About, Locale::En) => "about",
			(Section::About, Locale::Fr) => "a-propos",
		}
	}

	/// Sections whose pages are generated one per content document.
	pub fn has_documents(self) -> bool {
		matches!(self, Section::News | Section::Events | Section::Resources)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Section::Home => "home",
			Section::News => "news",
			Section::Events => "events",
			Section::Resources => "resources",
			Section::Teams => "teams",
			Section::About => "about",
		}
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
	type Err = UnknownSection;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Section::ALL
			.into_iter()
			.find(|section| section.as_str() == s)
			.ok_or_else(|| UnknownSection(s.to_string()))
	}
}

fn locale_root(locale: Locale) -> &'static str {
	match locale {
		Locale::En => "",
		Locale::Fr => FR_PREFIX,
	}
}

/// Index path of `section` in `locale`, e.g. `/fr/nouvelles/`.
pub fn section_path(section: Section, locale: Locale) -> String {
	collapse_slashes(&format!("{}/{}/", locale_root(locale), section.segment(locale)))
}

/// Path of the document with `slug` under `section` in `locale`.
pub fn document_path(section: Section, slug: &str, locale: Locale) -> String {
	let slug = slug.trim_matches('/');
	collapse_slashes(&format!("{}{slug}/", section_path(section, locale)))
}

/// Alternate URLs for a document whose slugs differ between locales.
///
/// Only locales with a slug get an entry, so a missing translation leaves
/// the language switcher to compute the path itself.
pub fn document_alternates(section: Section, slug_en: Option<&str>, slug_fr: Option<&str>) -> AlternateUrls {
	let entry = |slug: Option<&str>, locale| {
		slug.filter(|s| !s.is_empty())
			.map(|s| document_path(section, s, locale))
	};
	AlternateUrls::new(entry(slug_en, Locale::En), entry(slug_fr, Locale::Fr))
}

/// A page the static build must emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPath {
	pub slug: String,
	pub locale: Locale,
	pub path: String,
}

/// Static pages for every document of `section` published in `locale`.
///
/// Sections without per-document pages yield nothing. Teams are listed on
/// the section index only.
pub fn static_paths(query: &ContentQuery<'_>, section: Section, locale: Locale) -> Vec<StaticPath> {
	let slugs: Vec<String> = match section {
		Section::News => query.news_articles(locale).into_iter().map(|a| a.slug).collect(),
		Section::Events => query.events(locale).into_iter().map(|e| e.slug).collect(),
		Section::Resources => query.info_articles(locale).into_iter().map(|a| a.slug).collect(),
		Section::Home | Section::Teams | Section::About => Vec::new(),
	};

	slugs
		.into_iter()
		.map(|slug| StaticPath {
			path: document_path(section, &slug, locale),
			slug,
			locale,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use quadball_common_i18n::{alternate_path, infer_locale, switch_locale_path};

	#[test]
	fn test_section_paths() {
		assert_eq!(section_path(Section::Home, Locale::En), "/");
		assert_eq!(section_path(Section::Home, Locale::Fr), "/fr/");
		assert_eq!(section_path(Section::News, Locale::En), "/news/");
		assert_eq!(section_path(Section::News, Locale::Fr), "/fr/nouvelles/");
		assert_eq!(section_path(Section::Events, Locale::Fr), "/fr/evenements/");
		assert_eq!(section_path(Section::Teams, Locale::Fr), "/fr/equipes/");
		assert_eq!(section_path(Section::About, Locale::Fr), "/fr/a-propos/");
	}

	#[test]
	fn test_section_paths_infer_their_locale() {
		for section in Section::ALL {
			for locale in [Locale::En, Locale::Fr] {
				assert_eq!(infer_locale(Some(&section_path(section, locale))), locale);
			}
		}
	}

	#[test]
	fn test_home_alternates_match_path_algebra() {
		assert_eq!(
			alternate_path(&section_path(Section::Home, Locale::En), Locale::Fr),
			section_path(Section::Home, Locale::Fr)
		);
	}

	#[test]
	fn test_document_path() {
		assert_eq!(document_path(Section::News, "hello", Locale::En), "/news/hello/");
		assert_eq!(document_path(Section::News, "/bonjour/", Locale::Fr), "/fr/nouvelles/bonjour/");
		assert_eq!(document_path(Section::Home, "welcome", Locale::Fr), "/fr/welcome/");
	}

	#[test]
	fn test_document_alternates_feed_switcher() {
		let alternates = document_alternates(Section::News, Some("my-article"), Some("mon-article"));
		assert_eq!(
			switch_locale_path("/news/my-article/", Locale::Fr, Some(&alternates)),
			"/fr/nouvelles/mon-article/"
		);
		assert_eq!(
			switch_locale_path("/fr/nouvelles/mon-article/", Locale::En, Some(&alternates)),
			"/news/my-article/"
		);
	}

	#[test]
	fn test_document_alternates_skip_missing_slugs() {
		let alternates = document_alternates(Section::Events, Some("nationals"), None);
		assert_eq!(alternates.en.as_deref(), Some("/events/nationals/"));
		assert_eq!(alternates.fr, None);

		let alternates = document_alternates(Section::Events, Some(""), Some(""));
		assert!(alternates.is_empty());
	}

	#[test]
	fn test_parse_section() {
		assert_eq!("news".parse::<Section>(), Ok(Section::News));
		assert_eq!("resources".parse::<Section>(), Ok(Section::Resources));
		assert_eq!(
			"nouvelles".parse::<Section>(),
			Err(UnknownSection("nouvelles".to_string()))
		);
	}

	proptest! {
		/// Document paths land in the tree of the locale they were built for.
		#[test]
		fn document_paths_infer_their_locale(slug in "[a-z0-9][a-z0-9-]{0,20}") {
			for section in Section::ALL {
				for locale in [Locale::En, Locale::Fr] {
					let path = document_path(section, &slug, locale);
					prop_assert_eq!(infer_locale(Some(&path)), locale);
					prop_assert!(path.ends_with('/'));
					prop_assert!(!path.contains("//"));
				}
			}
		}

		/// Switching between a document's alternates is symmetric.
		#[test]
		fn alternates_switch_both_ways(en in "[a-z][a-z0-9-]{0,12}", fr in "[a-z][a-z0-9-]{0,12}") {
			let alternates = document_alternates(Section::News, Some(&en), Some(&fr));
			let en_path = document_path(Section::News, &en, Locale::En);
			let fr_path = document_path(Section::News, &fr, Locale::Fr);
			prop_assert_eq!(switch_locale_path(&en_path, Locale::Fr, Some(&alternates)), fr_path.clone());
			prop_assert_eq!(switch_locale_path(&fr_path, Locale::En, Some(&alternates)), en_path);
		}
	}
}

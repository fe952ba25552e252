// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content documents as the store exports them.
//!
//! Localized fields are `{ "en": ..., "fr": ... }` records. Portable-text
//! content blocks are kept as opaque JSON since rendering them is the
//! template layer's job. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use quadball_common_i18n::{Locale, LocalizedValue, SlugValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type LocalizedText = LocalizedValue<String>;
pub type LocalizedSlug = LocalizedValue<SlugValue>;
pub type LocalizedBlocks = LocalizedValue<Vec<Value>>;

/// Reference to an author document, already dereferenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
	#[serde(rename = "_id")]
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub slug: Option<SlugValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoFields {
	#[serde(default)]
	pub meta_title: Option<LocalizedText>,
	#[serde(default)]
	pub meta_description: Option<LocalizedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(default)]
	pub title: LocalizedText,
	#[serde(default)]
	pub slug: LocalizedSlug,
	#[serde(default)]
	pub excerpt: Option<LocalizedText>,
	#[serde(default)]
	pub content: Option<LocalizedBlocks>,
	pub published_at: DateTime<Utc>,
	#[serde(default)]
	pub author: Option<AuthorRef>,
	#[serde(default)]
	pub seo: Option<SeoFields>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(default)]
	pub title: LocalizedText,
	#[serde(default)]
	pub slug: LocalizedSlug,
	pub start_date_time: DateTime<Utc>,
	#[serde(default)]
	pub end_date_time: Option<DateTime<Utc>>,
	/// IANA zone name the event is scheduled in, e.g. `America/Toronto`.
	#[serde(default)]
	pub timezone: Option<String>,
	#[serde(default)]
	pub description: Option<LocalizedText>,
	#[serde(default)]
	pub content: Option<LocalizedBlocks>,
}

/// A resource page ("info article").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoArticle {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(default)]
	pub title: LocalizedText,
	#[serde(default)]
	pub slug: LocalizedSlug,
	#[serde(default)]
	pub excerpt: Option<LocalizedText>,
	#[serde(default)]
	pub content: Option<LocalizedBlocks>,
	#[serde(default)]
	pub seo: Option<SeoFields>,
}

/// How a team plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactLevel {
	FullContact,
	Recreational,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
	#[serde(default)]
	pub facebook: Option<String>,
	#[serde(default)]
	pub instagram: Option<String>,
	#[serde(default)]
	pub twitter: Option<String>,
}

/// A member team. Team names and slugs are not translated; only the
/// description is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub slug: Option<SlugValue>,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub province: Option<String>,
	#[serde(default)]
	pub contact_level: Option<ContactLevel>,
	#[serde(default)]
	pub division: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub website: Option<String>,
	#[serde(default)]
	pub description: Option<LocalizedText>,
	#[serde(default)]
	pub social_media: Option<SocialMedia>,
	#[serde(default)]
	pub active: Option<bool>,
}

impl Team {
	/// The slug, if present and non-empty.
	pub fn slug(&self) -> Option<&str> {
		self.slug
			.as_ref()
			.and_then(|slug| slug.current.as_deref())
			.filter(|slug| !slug.is_empty())
	}
}

/// Anything in an export that carries a document id.
pub trait Record {
	const KIND: &'static str;

	fn id(&self) -> &str;
}

/// A record published per locale under its own slugs.
pub trait Document: Record {
	fn slugs(&self) -> &LocalizedSlug;

	/// The raw slug for `locale`, without fallback. Empty slugs count as
	/// missing, so the document is not published in that locale.
	fn slug_for(&self, locale: Locale) -> Option<&str> {
		self.slugs()
			.get(locale)
			.and_then(|slug| slug.current.as_deref())
			.filter(|slug| !slug.is_empty())
	}
}

impl Record for NewsArticle {
	const KIND: &'static str = "newsArticle";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Document for NewsArticle {
	fn slugs(&self) -> &LocalizedSlug {
		&self.slug
	}
}

impl Record for Event {
	const KIND: &'static str = "event";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Document for Event {
	fn slugs(&self) -> &LocalizedSlug {
		&self.slug
	}
}

impl Record for InfoArticle {
	const KIND: &'static str = "infoArticle";

	fn id(&self) -> &str {
		&self.id
	}
}

impl Document for InfoArticle {
	fn slugs(&self) -> &LocalizedSlug {
		&self.slug
	}
}

impl Record for Team {
	const KIND: &'static str = "team";

	fn id(&self) -> &str {
		&self.id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_news_article() {
		let json = r#"{
			"_id": "news-1",
			"_type": "newsArticle",
			"title": {"en": "Nationals recap", "fr": "Retour sur les nationaux"},
			"slug": {"en": {"current": "nationals-recap"}, "fr": {"current": "retour-nationaux"}},
			"publishedAt": "2025-03-01T12:00:00Z",
			"author": {"_id": "author-1", "name": "Sam", "slug": {"current": "sam"}}
		}"#;
		let article: NewsArticle = serde_json::from_str(json).unwrap();
		assert_eq!(article.id, "news-1");
		assert_eq!(article.title.text(Locale::Fr), "Retour sur les nationaux");
		assert_eq!(article.slug_for(Locale::En), Some("nationals-recap"));
		assert_eq!(article.author.unwrap().name, "Sam");
		assert!(article.excerpt.is_none());
	}

	#[test]
	fn test_slug_for_ignores_missing_and_empty() {
		let json = r#"{
			"_id": "e1",
			"slug": {"en": {"current": ""}, "fr": {}},
			"startDateTime": "2025-06-01T09:00:00Z"
		}"#;
		let event: Event = serde_json::from_str(json).unwrap();
		assert_eq!(event.slug_for(Locale::En), None);
		assert_eq!(event.slug_for(Locale::Fr), None);
	}

	#[test]
	fn test_deserialize_team() {
		let json = r#"{
			"_id": "team-1",
			"name": "Toronto Raptors QC",
			"slug": {"current": "toronto-raptors"},
			"city": "Toronto",
			"province": "ON",
			"contactLevel": "full-contact",
			"description": {"en": "Founded 2012", "fr": "Fondee en 2012"},
			"socialMedia": {"instagram": "https://instagram.com/raptorsqc", "twitter": null},
			"active": true
		}"#;
		let team: Team = serde_json::from_str(json).unwrap();
		assert_eq!(team.slug(), Some("toronto-raptors"));
		assert_eq!(team.contact_level, Some(ContactLevel::FullContact));
		assert_eq!(team.description.unwrap().text(Locale::Fr), "Fondee en 2012");
		assert!(team.social_media.unwrap().twitter.is_none());
	}

	#[test]
	fn test_team_without_slug() {
		let team: Team = serde_json::from_str(r#"{"_id": "t", "name": "X", "slug": {"current": ""}}"#).unwrap();
		assert_eq!(team.slug(), None);
		assert_eq!(team.id(), "t");
	}

	#[test]
	fn test_missing_required_timestamp_is_an_error() {
		let json = r#"{"_id": "news-2"}"#;
		assert!(serde_json::from_str::<NewsArticle>(json).is_err());
	}
}

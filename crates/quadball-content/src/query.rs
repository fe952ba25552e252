// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-locale projections of a [`Dataset`].
//!
//! A document is listed in a locale only when it has a slug there. Text
//! fields are taken in the requested locale and fall back to the default.

use chrono::{DateTime, Utc};
use quadball_common_i18n::{pick, AlternateUrls, Locale, DEFAULT_LOCALE};
use serde::Serialize;
use serde_json::Value;

use crate::dataset::Dataset;
use crate::document::{
	AuthorRef, ContactLevel, Document, Event, InfoArticle, LocalizedBlocks, LocalizedText, NewsArticle,
	SeoFields, SocialMedia, Team,
};
use crate::routes::{document_alternates, Section};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleSummary {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub excerpt: Option<String>,
	pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
	pub id: String,
	pub name: String,
	pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
	pub meta_title: Option<String>,
	pub meta_description: Option<String>,
}

/// Raw slugs of a document in both locales, for building alternate links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugPair {
	pub slug_en: Option<String>,
	pub slug_fr: Option<String>,
}

impl SlugPair {
	fn of<D: Document>(doc: &D) -> Self {
		Self {
			slug_en: doc.slug_for(Locale::En).map(str::to_string),
			slug_fr: doc.slug_for(Locale::Fr).map(str::to_string),
		}
	}

	pub fn alternates(&self, section: Section) -> AlternateUrls {
		document_alternates(section, self.slug_en.as_deref(), self.slug_fr.as_deref())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDetail {
	#[serde(flatten)]
	pub summary: NewsArticleSummary,
	pub content: Vec<Value>,
	pub author: Option<Author>,
	pub seo: Option<SeoMeta>,
	#[serde(flatten)]
	pub slugs: SlugPair,
}

impl NewsArticleDetail {
	pub fn alternates(&self) -> AlternateUrls {
		self.slugs.alternates(Section::News)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub start_date_time: DateTime<Utc>,
	pub end_date_time: Option<DateTime<Utc>>,
	pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
	#[serde(flatten)]
	pub summary: EventSummary,
	pub description: Option<String>,
	pub content: Vec<Value>,
	#[serde(flatten)]
	pub slugs: SlugPair,
}

impl EventDetail {
	pub fn alternates(&self) -> AlternateUrls {
		self.slugs.alternates(Section::Events)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoArticleSummary {
	pub id: String,
	pub slug: String,
	pub title: String,
	pub excerpt: Option<String>,
	#[serde(flatten)]
	pub slugs: SlugPair,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoArticleDetail {
	#[serde(flatten)]
	pub summary: InfoArticleSummary,
	pub content: Vec<Value>,
	pub seo: Option<SeoMeta>,
}

impl InfoArticleDetail {
	pub fn alternates(&self) -> AlternateUrls {
		self.summary.slugs.alternates(Section::Resources)
	}
}

/// A team as listed on the teams index. Teams have no per-team pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
	pub id: String,
	pub slug: String,
	pub name: String,
	pub city: Option<String>,
	pub province: Option<String>,
	pub contact_level: Option<ContactLevel>,
	pub division: Option<String>,
	pub email: Option<String>,
	pub website: Option<String>,
	pub description: Option<String>,
	pub social_media: Option<SocialMedia>,
	pub active: Option<bool>,
}

fn text(value: &LocalizedText, locale: Locale) -> String {
	value.text(locale)
}

fn optional_text(value: Option<&LocalizedText>, locale: Locale) -> Option<String> {
	pick(value, locale, DEFAULT_LOCALE).cloned()
}

fn blocks(value: Option<&LocalizedBlocks>, locale: Locale) -> Vec<Value> {
	pick(value, locale, DEFAULT_LOCALE).cloned().unwrap_or_default()
}

fn seo(value: Option<&SeoFields>, locale: Locale) -> Option<SeoMeta> {
	value.map(|seo| SeoMeta {
		meta_title: optional_text(seo.meta_title.as_ref(), locale),
		meta_description: optional_text(seo.meta_description.as_ref(), locale),
	})
}

fn author(value: Option<&AuthorRef>) -> Option<Author> {
	value.map(|author| Author {
		id: author.id.clone(),
		name: author.name.clone(),
		slug: author.slug.as_ref().and_then(|slug| slug.current.clone()),
	})
}

/// The inclusive slice end the content store's query language expects for
/// a result of `limit` items (`[0..end]` includes `end`).
pub fn store_slice_end(limit: usize) -> usize {
	limit.saturating_sub(1)
}

/// Read-only queries over a validated dataset.
#[derive(Debug, Clone, Copy)]
pub struct ContentQuery<'a> {
	dataset: &'a Dataset,
}

impl<'a> ContentQuery<'a> {
	pub fn new(dataset: &'a Dataset) -> Self {
		Self { dataset }
	}

	fn news_summary(article: &NewsArticle, slug: &str, locale: Locale) -> NewsArticleSummary {
		NewsArticleSummary {
			id: article.id.clone(),
			slug: slug.to_string(),
			title: text(&article.title, locale),
			excerpt: optional_text(article.excerpt.as_ref(), locale),
			published_at: article.published_at,
		}
	}

	/// News published in `locale`, newest first.
	pub fn news_articles(&self, locale: Locale) -> Vec<NewsArticleSummary> {
		let mut articles: Vec<_> = self
			.dataset
			.news_articles
			.iter()
			.filter_map(|a| a.slug_for(locale).map(|slug| Self::news_summary(a, slug, locale)))
			.collect();
		articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
		articles
	}

	pub fn news_article(&self, slug: &str, locale: Locale) -> Option<NewsArticleDetail> {
		let article = find_by_slug(&self.dataset.news_articles, slug, locale)?;
		Some(NewsArticleDetail {
			summary: Self::news_summary(article, slug, locale),
			content: blocks(article.content.as_ref(), locale),
			author: author(article.author.as_ref()),
			seo: seo(article.seo.as_ref(), locale),
			slugs: SlugPair::of(article),
		})
	}

	/// Up to `limit` other articles from the `locale` feed, newest first.
	pub fn related_news(&self, exclude_id: &str, locale: Locale, limit: usize) -> Vec<NewsArticleSummary> {
		if limit == 0 {
			return Vec::new();
		}
		self.news_articles(locale)
			.into_iter()
			.filter(|a| a.id != exclude_id)
			.take(store_slice_end(limit) + 1)
			.collect()
	}

	fn event_summary(event: &Event, slug: &str, locale: Locale) -> EventSummary {
		EventSummary {
			id: event.id.clone(),
			slug: slug.to_string(),
			title: text(&event.title, locale),
			start_date_time: event.start_date_time,
			end_date_time: event.end_date_time,
			timezone: event.timezone.clone(),
		}
	}

	/// Events published in `locale`, latest start first.
	pub fn events(&self, locale: Locale) -> Vec<EventSummary> {
		let mut events: Vec<_> = self
			.dataset
			.events
			.iter()
			.filter_map(|e| e.slug_for(locale).map(|slug| Self::event_summary(e, slug, locale)))
			.collect();
		events.sort_by(|a, b| b.start_date_time.cmp(&a.start_date_time));
		events
	}

	/// Events in `locale` starting at or after `now`, soonest first.
	pub fn upcoming_events(&self, locale: Locale, now: DateTime<Utc>) -> Vec<EventSummary> {
		let mut events: Vec<_> = self
			.events(locale)
			.into_iter()
			.filter(|e| e.start_date_time >= now)
			.collect();
		events.sort_by(|a, b| a.start_date_time.cmp(&b.start_date_time));
		events
	}

	pub fn event(&self, slug: &str, locale: Locale) -> Option<EventDetail> {
		let event = find_by_slug(&self.dataset.events, slug, locale)?;
		Some(EventDetail {
			summary: Self::event_summary(event, slug, locale),
			description: optional_text(event.description.as_ref(), locale),
			content: blocks(event.content.as_ref(), locale),
			slugs: SlugPair::of(event),
		})
	}

	fn info_summary(article: &InfoArticle, slug: &str, locale: Locale) -> InfoArticleSummary {
		InfoArticleSummary {
			id: article.id.clone(),
			slug: slug.to_string(),
			title: text(&article.title, locale),
			excerpt: optional_text(article.excerpt.as_ref(), locale),
			slugs: SlugPair::of(article),
		}
	}

	/// Resource pages published in `locale`, by title.
	pub fn info_articles(&self, locale: Locale) -> Vec<InfoArticleSummary> {
		let mut articles: Vec<_> = self
			.dataset
			.info_articles
			.iter()
			.filter_map(|a| a.slug_for(locale).map(|slug| Self::info_summary(a, slug, locale)))
			.collect();
		articles.sort_by(|a, b| a.title.cmp(&b.title));
		articles
	}

	pub fn info_article(&self, slug: &str, locale: Locale) -> Option<InfoArticleDetail> {
		let article = find_by_slug(&self.dataset.info_articles, slug, locale)?;
		Some(InfoArticleDetail {
			summary: Self::info_summary(article, slug, locale),
			content: blocks(article.content.as_ref(), locale),
			seo: seo(article.seo.as_ref(), locale),
		})
	}

	/// Teams with a slug, by name. Only the description is localized.
	pub fn teams(&self, locale: Locale) -> Vec<TeamSummary> {
		let mut teams: Vec<_> = self
			.dataset
			.teams
			.iter()
			.filter_map(|team| {
				team.slug().map(|slug| TeamSummary {
					id: team.id.clone(),
					slug: slug.to_string(),
					name: team.name.clone(),
					city: team.city.clone(),
					province: team.province.clone(),
					contact_level: team.contact_level,
					division: team.division.clone(),
					email: team.email.clone(),
					website: team.website.clone(),
					description: optional_text(team.description.as_ref(), locale),
					social_media: team.social_media.clone(),
					active: team.active,
				})
			})
			.collect();
		teams.sort_by(|a, b| a.name.cmp(&b.name));
		teams
	}
}

fn find_by_slug<'d, D: Document>(documents: &'d [D], slug: &str, locale: Locale) -> Option<&'d D> {
	documents.iter().find(|doc| doc.slug_for(locale) == Some(slug))
}

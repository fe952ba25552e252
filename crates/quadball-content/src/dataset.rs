// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading and validating a content export.

use std::collections::HashSet;
use std::path::Path;

use quadball_common_i18n::DEFAULT_LOCALE;
use serde::{de, Deserialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::document::{Document, Event, InfoArticle, NewsArticle, Record, Team};
use crate::error::{ContentError, Result};

/// Every document the site renders, validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
	#[serde(default)]
	pub news_articles: Vec<NewsArticle>,
	#[serde(default)]
	pub events: Vec<Event>,
	#[serde(default)]
	pub info_articles: Vec<InfoArticle>,
	#[serde(default)]
	pub teams: Vec<Team>,
}

impl Dataset {
	/// Parse and validate an export.
	pub fn from_json(json: &str) -> Result<Self> {
		let dataset = parse_export(json).map_err(ContentError::Parse)?;
		dataset.validate()?;
		Ok(dataset)
	}

	/// Read, parse and validate an export file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		debug!(path = %path.display(), "loading content export");

		let json = std::fs::read_to_string(path).map_err(|e| ContentError::FileRead {
			path: path.to_path_buf(),
			source: e,
		})?;
		let dataset = parse_export(&json).map_err(|e| ContentError::ParseFile {
			path: path.to_path_buf(),
			source: e,
		})?;
		dataset.validate()?;

		info!(
			path = %path.display(),
			news_articles = dataset.news_articles.len(),
			events = dataset.events.len(),
			info_articles = dataset.info_articles.len(),
			teams = dataset.teams.len(),
			"content export loaded"
		);
		Ok(dataset)
	}

	fn validate(&self) -> Result<()> {
		validate_documents(&self.news_articles)?;
		validate_documents(&self.events)?;
		validate_documents(&self.info_articles)?;
		validate_ids(&self.teams)?;
		Ok(())
	}
}

/// The export must be an object of document arrays. A derived struct
/// visitor would also accept a sequence, so the shape is checked first.
fn parse_export(json: &str) -> serde_json::Result<Dataset> {
	let value: Value = serde_json::from_str(json)?;
	if !value.is_object() {
		return Err(de::Error::custom("expected an object of document arrays"));
	}
	serde_json::from_value(value)
}

fn validate_ids<R: Record>(records: &[R]) -> Result<()> {
	let mut seen = HashSet::new();
	for (index, record) in records.iter().enumerate() {
		let id = record.id();
		if id.trim().is_empty() {
			return Err(ContentError::MissingId {
				kind: R::KIND,
				index,
			});
		}
		if !seen.insert(id) {
			return Err(ContentError::DuplicateId {
				kind: R::KIND,
				id: id.to_string(),
			});
		}
	}
	Ok(())
}

fn validate_documents<D: Document>(documents: &[D]) -> Result<()> {
	validate_ids(documents)?;
	for doc in documents {
		let id = doc.id();
		if doc.slug_for(DEFAULT_LOCALE).is_none() {
			warn!(
				kind = D::KIND,
				id,
				locale = %DEFAULT_LOCALE,
				"document has no default-locale slug"
			);
		}
	}
	Ok(())
}

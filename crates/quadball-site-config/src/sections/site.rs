// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site configuration section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Base URL of the local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4321";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfigLayer {
	pub base_url: Option<String>,
	pub dataset_path: Option<PathBuf>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.dataset_path.is_some() {
			self.dataset_path = other.dataset_path;
		}
	}

	pub fn finalize(self) -> Result<SiteConfig, ConfigError> {
		let raw = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let base_url = parse_base_url(&raw)?;
		Ok(SiteConfig {
			base_url,
			dataset_path: self.dataset_path,
		})
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
		key: "site.base_url".to_string(),
		message: format!("'{raw}' is not an absolute URL: {e}"),
	})?;

	if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
		return Err(ConfigError::InvalidValue {
			key: "site.base_url".to_string(),
			message: format!("'{raw}' must be an http or https URL"),
		});
	}

	// Site paths are rooted, so joining them would discard any base path.
	if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
		return Err(ConfigError::InvalidValue {
			key: "site.base_url".to_string(),
			message: format!("'{raw}' must be an origin with no path, query or fragment"),
		});
	}

	Ok(url)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
	/// Origin (scheme, host, port) canonical and alternate links are built
	/// against.
	pub base_url: Url,
	/// Content export read by route generation.
	pub dataset_path: Option<PathBuf>,
}

impl SiteConfig {
	/// Absolute URL of a site path, e.g. `/fr/` against the base URL.
	pub fn absolute_url(&self, path: &str) -> Result<Url, url::ParseError> {
		self.base_url.join(path)
	}
}

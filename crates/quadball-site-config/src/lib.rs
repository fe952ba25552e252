// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Quadball Canada site tooling.
//!
//! Layered from built-in defaults, a TOML file and `QUADBALL_SITE_*`
//! environment variables, in increasing precedence.
//!
//! # Usage
//!
//! ```ignore
//! use quadball_site_config::load_config;
//!
//! let config = load_config()?;
//! println!("canonical origin: {}", config.site.base_url);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::QuadballConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadballConfig {
	pub site: SiteConfig,
	pub logging: LoggingConfig,
	pub i18n: I18nConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`QUADBALL_SITE_*`)
/// 2. Config file (`/etc/quadball/site.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<QuadballConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<QuadballConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<QuadballConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = QuadballConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize a merged layer into resolved config.
pub fn finalize(layer: QuadballConfigLayer) -> Result<QuadballConfig, ConfigError> {
	let site = layer.site.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();

	validate_config(&logging)?;

	info!(
		base_url = %site.base_url,
		dataset_configured = site.dataset_path.is_some(),
		log_format = %logging.format,
		warn_missing_translations = i18n.warn_missing_translations,
		"site configuration loaded"
	);

	Ok(QuadballConfig { site, logging, i18n })
}

fn validate_config(logging: &LoggingConfig) -> Result<(), ConfigError> {
	if logging.level.trim().is_empty() {
		return Err(ConfigError::Validation(
			"logging.level must not be empty".to_string(),
		));
	}

	Ok(())
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::Context;
use quadball_site_config::{I18nConfig, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub fn init_tracing(logging: &LoggingConfig, i18n: &I18nConfig) -> anyhow::Result<()> {
	let base = std::env::var(EnvFilter::DEFAULT_ENV)
		.ok()
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| logging.level.clone());
	let filter = build_filter(&base, i18n.log_directive())?;

	match logging.format {
		LogFormat::Pretty => tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.init(),
		LogFormat::Json => tracing_subscriber::fmt()
			.json()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.init(),
	}

	Ok(())
}

fn build_filter(base: &str, extra: Option<&str>) -> anyhow::Result<EnvFilter> {
	let mut filter =
		EnvFilter::try_new(base).with_context(|| format!("invalid log filter '{base}'"))?;
	if let Some(directive) = extra {
		filter = filter.add_directive(
			directive
				.parse()
				.with_context(|| format!("invalid log directive '{directive}'"))?,
		);
	}
	Ok(filter)
}

#[cfg(test)]
mod tests {
	use super::*;
	use quadball_site_config::QUIET_CATALOG_DIRECTIVE;

	#[test]
	fn test_build_filter_with_quiet_catalog() {
		let filter = build_filter("info", Some(QUIET_CATALOG_DIRECTIVE)).unwrap();
		assert!(filter.to_string().contains("quadball_common_i18n::catalog"));
	}

	#[test]
	fn test_build_filter_without_extra() {
		let filter = build_filter("quadball_content=debug", None).unwrap();
		assert!(!filter.to_string().contains("catalog"));
	}

	#[test]
	fn test_build_filter_rejects_garbage() {
		assert!(build_filter("quadball=bogus", None).is_err());
	}
}

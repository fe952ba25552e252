// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Args, Subcommand};
use quadball_common_i18n::{
	alternate_path, infer_locale, missing_keys, normalize_path, resolve_locale_str, switch_locale_path,
	switcher_links, t, AlternateUrls, Locale, RenderContext, SUPPORTED_LOCALES,
};
use quadball_content::{static_paths, ContentQuery, Dataset, Section};
use quadball_site_config::QuadballConfig;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Normalize a path to its canonical slash form
	Normalize { path: String },

	/// Print the locale a path belongs to
	Locale { path: String },

	/// Map a path into the other locale's URL tree
	Alternate {
		path: String,
		#[arg(long)]
		to: Locale,
	},

	/// Compute the language switch target for a page
	Switch {
		path: String,
		#[arg(long)]
		to: Locale,
		#[command(flatten)]
		alternates: AlternateArgs,
	},

	/// Print the language switcher entries for a page as JSON
	Links {
		path: String,
		#[command(flatten)]
		alternates: AlternateArgs,
	},

	/// Resolve the locale for a request URL
	Resolve {
		url: String,
		/// Locale hint supplied by the rendering framework
		#[arg(long)]
		hint: Option<String>,
		/// Explicit locale that overrides everything else
		#[arg(long)]
		locale: Option<String>,
	},

	/// Translate a catalog key
	T { locale: Locale, key: String },

	/// List catalog keys with no translation in a locale
	Catalog {
		#[arg(long, default_value = "fr")]
		locale: Locale,
	},

	/// Print the static pages of a section as JSON
	Routes {
		#[arg(long)]
		section: Section,
		#[arg(long)]
		locale: Locale,
		/// Content export; overrides site.dataset_path
		#[arg(long)]
		dataset: Option<PathBuf>,
	},

	/// Print absolute canonical and hreflang URLs for a page as JSON
	Canonical {
		path: String,
		#[command(flatten)]
		alternates: AlternateArgs,
	},
}

/// Author-supplied alternate URLs for the current page.
#[derive(Debug, Clone, Default, Args)]
pub struct AlternateArgs {
	/// English alternate URL
	#[arg(long)]
	pub alt_en: Option<String>,

	/// French alternate URL
	#[arg(long)]
	pub alt_fr: Option<String>,
}

impl AlternateArgs {
	fn to_alternates(&self) -> Option<AlternateUrls> {
		if self.alt_en.is_none() && self.alt_fr.is_none() {
			return None;
		}
		Some(AlternateUrls::new(self.alt_en.clone(), self.alt_fr.clone()))
	}
}

#[derive(Debug, Serialize)]
struct MissingKeys {
	locale: Locale,
	missing: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct HrefLang {
	hreflang: &'static str,
	href: String,
}

#[derive(Debug, Serialize)]
struct CanonicalLinks {
	locale: Locale,
	canonical: String,
	alternates: Vec<HrefLang>,
}

/// Run `command` and return what it prints.
pub fn run(command: Command, config: &QuadballConfig) -> anyhow::Result<String> {
	match command {
		Command::Normalize { path } => Ok(normalize_path(Some(&path))),
		Command::Locale { path } => Ok(infer_locale(Some(&path)).to_string()),
		Command::Alternate { path, to } => Ok(alternate_path(&path, to)),
		Command::Switch { path, to, alternates } => {
			Ok(switch_locale_path(&path, to, alternates.to_alternates().as_ref()))
		}
		Command::Links { path, alternates } => {
			let links = switcher_links(&path, alternates.to_alternates().as_ref());
			to_json(&links)
		}
		Command::Resolve { url, hint, locale } => {
			let mut ctx = RenderContext::new().with_url(&url);
			if let Some(hint) = hint {
				ctx = ctx.with_locale_hint(hint);
			}
			Ok(resolve_locale_str(&ctx, locale.as_deref()).to_string())
		}
		Command::T { locale, key } => Ok(t(locale, &key).to_string()),
		Command::Catalog { locale } => to_json(&MissingKeys {
			locale,
			missing: missing_keys(locale),
		}),
		Command::Routes {
			section,
			locale,
			dataset,
		} => routes(config, section, locale, dataset),
		Command::Canonical { path, alternates } => canonical(config, &path, alternates.to_alternates()),
	}
}

fn routes(
	config: &QuadballConfig,
	section: Section,
	locale: Locale,
	dataset: Option<PathBuf>,
) -> anyhow::Result<String> {
	let path = dataset
		.or_else(|| config.site.dataset_path.clone())
		.ok_or_else(|| anyhow!("no content export given; pass --dataset or set site.dataset_path"))?;

	let dataset = Dataset::load(&path)?;
	let query = ContentQuery::new(&dataset);
	let paths = static_paths(&query, section, locale);
	info!(%section, %locale, pages = paths.len(), "static paths computed");
	to_json(&paths)
}

fn canonical(config: &QuadballConfig, path: &str, alternates: Option<AlternateUrls>) -> anyhow::Result<String> {
	let normalized = normalize_path(Some(path));
	let locale = infer_locale(Some(&normalized));
	let absolute = |path: &str| -> anyhow::Result<String> {
		let url = config
			.site
			.absolute_url(path)
			.with_context(|| format!("cannot join '{path}' to {}", config.site.base_url))?;
		Ok(url.to_string())
	};

	let mut links = Vec::with_capacity(SUPPORTED_LOCALES.len() + 1);
	for target in SUPPORTED_LOCALES {
		let href = absolute(&switch_locale_path(&normalized, target, alternates.as_ref()))?;
		links.push(HrefLang {
			hreflang: target.intl_tag(),
			href,
		});
	}
	if let Some(default) = links.first() {
		links.push(HrefLang {
			hreflang: "x-default",
			href: default.href.clone(),
		});
	}

	debug!(path = %normalized, %locale, "canonical links computed");
	to_json(&CanonicalLinks {
		locale,
		canonical: absolute(&normalized)?,
		alternates: links,
	})
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
	serde_json::to_string_pretty(value).context("failed to serialize output")
}

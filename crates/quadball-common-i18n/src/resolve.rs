// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::infer::infer_locale;
use crate::locale::{Locale, DEFAULT_LOCALE};
use crate::switch::is_absolute_url;

/// Base that site-relative request URLs are resolved against.
const REQUEST_BASE: &str = "http://localhost/";

/// `host:port` with no scheme, e.g. `localhost:4321/fr/`.
static HOST_PORT: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+:\d+(?:[/?#]|$)").unwrap());

/// The parts of a rendering context that locale resolution reads.
pub trait LocaleContext {
	/// A locale pre-resolved by the router (e.g. a page prop). May be any
	/// string; unsupported values are ignored.
	fn locale_hint(&self) -> Option<&str>;

	/// Path of the request being rendered, if known.
	fn request_path(&self) -> Option<&str>;
}

/// A plain [`LocaleContext`] built by the rendering pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
	locale_hint: Option<String>,
	path: Option<String>,
}

impl RenderContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_locale_hint(mut self, hint: impl Into<String>) -> Self {
		self.locale_hint = Some(hint.into());
		self
	}

	/// Attach the request URL. Only its path is kept, percent-encoded, with
	/// query and fragment dropped. Absolute, protocol-relative (`//host/...`),
	/// schemeless `host:port/...` and site-relative forms are all accepted.
	pub fn with_url(mut self, url: &str) -> Self {
		self.path = Some(url_path(url.trim()));
		self
	}
}

fn url_path(url: &str) -> String {
	let target = if !is_absolute_url(url) && HOST_PORT.is_match(url) {
		format!("//{url}")
	} else {
		url.to_string()
	};

	match Url::parse(REQUEST_BASE).and_then(|base| base.join(&target)) {
		Ok(parsed) => parsed.path().to_string(),
		Err(e) => {
			debug!(url, error = %e, "unparseable request URL, using it as a path");
			match url.find(['?', '#']) {
				Some(idx) => url[..idx].to_string(),
				None => url.to_string(),
			}
		}
	}
}

impl LocaleContext for RenderContext {
	fn locale_hint(&self) -> Option<&str> {
		self.locale_hint.as_deref()
	}

	fn request_path(&self) -> Option<&str> {
		self.path.as_deref()
	}
}

/// Resolve the locale a page renders in.
///
/// Resolution order (highest to lowest priority):
/// 1. The explicit locale, if given
/// 2. The context's locale hint, if it names a supported locale
/// 3. The locale inferred from the request path
/// 4. [`DEFAULT_LOCALE`]
///
/// ```
/// use quadball_common_i18n::{resolve_locale, Locale, RenderContext};
///
/// let ctx = RenderContext::new().with_url("http://localhost/fr/nouvelles/");
/// assert_eq!(resolve_locale(&ctx, None), Locale::Fr);
/// assert_eq!(resolve_locale(&ctx, Some(Locale::En)), Locale::En);
///
/// let ctx = RenderContext::new().with_locale_hint("de").with_url("/fr/");
/// assert_eq!(resolve_locale(&ctx, None), Locale::Fr);
/// ```
pub fn resolve_locale<C: LocaleContext + ?Sized>(ctx: &C, explicit: Option<Locale>) -> Locale {
	if let Some(locale) = explicit {
		return locale;
	}

	if let Some(hint) = ctx.locale_hint() {
		match Locale::parse(hint) {
			Some(locale) => return locale,
			None => debug!(hint, "ignoring unsupported locale hint"),
		}
	}

	match ctx.request_path() {
		Some(path) => infer_locale(Some(path)),
		None => DEFAULT_LOCALE,
	}
}

/// [`resolve_locale`] for an untyped explicit tag. Unsupported tags are
/// ignored rather than rejected.
pub fn resolve_locale_str<C: LocaleContext + ?Sized>(ctx: &C, explicit: Option<&str>) -> Locale {
	let explicit = explicit.and_then(|tag| {
		let parsed = Locale::parse(tag);
		if parsed.is_none() {
			debug!(tag, "ignoring unsupported explicit locale");
		}
		parsed
	});
	resolve_locale(ctx, explicit)
}

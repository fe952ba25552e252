// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bilingual (English/French) locale support for the Quadball Canada site.
//!
//! The site is published as two mirrored URL trees. English is the default
//! locale and carries no path prefix; French pages live under `/fr/`. This
//! crate owns the path algebra between the two trees:
//!
//! - Path normalization (leading and trailing slash, empty → `/`)
//! - Locale inference from a path prefix
//! - Alternate-locale path computation (`/news/` ⇄ `/fr/news/`)
//! - Locale resolution for a rendering context
//! - Per-locale value lookup with default-locale fallback
//! - Language switch links honoring author-supplied alternate URLs
//! - The UI copy catalog
//!
//! Every function here is total: missing translations fall back to the
//! default locale and nothing panics or returns an error.
//!
//! # Example
//!
//! ```
//! use quadball_common_i18n::{alternate_path, infer_locale, switch_locale_path, Locale};
//!
//! assert_eq!(infer_locale(Some("/fr/nouvelles/")), Locale::Fr);
//! assert_eq!(alternate_path("/news", Locale::Fr), "/fr/news/");
//! assert_eq!(alternate_path("/fr/", Locale::En), "/");
//! assert_eq!(switch_locale_path("/", Locale::Fr, None), "/fr/");
//! ```

mod alternate;
mod catalog;
mod infer;
mod locale;
mod localized;
mod path;
mod resolve;
mod slug_path;
mod switch;
mod switcher;

pub use alternate::alternate_path;
pub use catalog::{catalog_keys, missing_keys, t};
pub use infer::{infer_locale, is_alternate_path};
pub use locale::{is_supported, Locale, UnknownLocale, DEFAULT_LOCALE, FR_PREFIX, SUPPORTED_LOCALES};
pub use localized::{pick, pick_slug, pick_string, LocalizedValue, SlugValue};
pub use path::{collapse_slashes, ensure_leading_slash, ensure_trailing_slash, normalize_path};
pub use resolve::{resolve_locale, resolve_locale_str, LocaleContext, RenderContext};
pub use slug_path::localized_path;
pub use switch::{is_absolute_url, switch_locale_path, AlternateUrls};
pub use switcher::{switcher_links, SwitchLink};

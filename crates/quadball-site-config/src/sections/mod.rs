// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod i18n;
mod logging;
mod site;

pub use i18n::{I18nConfig, I18nConfigLayer, QUIET_CATALOG_DIRECTIVE};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use site::{SiteConfig, SiteConfigLayer, DEFAULT_BASE_URL};

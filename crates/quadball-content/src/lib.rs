// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed content records for the Quadball Canada site.
//!
//! This crate is the boundary where content-store exports enter the system:
//!
//! - [`Dataset`]: parsed, validated documents (news, events, resources, teams)
//! - [`ContentQuery`]: per-locale projections with default-locale fallback
//! - [`routes`]: section paths in both URL trees, document alternates and
//!   the static page list for a build
//!
//! Everything downstream works on these typed values and never on raw JSON.

pub mod dataset;
pub mod document;
pub mod error;
pub mod query;
pub mod routes;

pub use dataset::Dataset;
pub use document::{ContactLevel, Document, Event, InfoArticle, NewsArticle, Record, SocialMedia, Team};
pub use error::{ContentError, Result};
pub use query::{
	store_slice_end, ContentQuery, EventDetail, EventSummary, InfoArticleDetail, InfoArticleSummary,
	NewsArticleDetail, NewsArticleSummary, TeamSummary,
};
pub use routes::{document_alternates, document_path, section_path, static_paths, Section, StaticPath};

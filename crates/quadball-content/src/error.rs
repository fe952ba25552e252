// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content loading error types.

use std::path::PathBuf;

/// Errors raised while loading or validating a content export.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
	/// Reading the export file failed
	#[error("failed to read content export {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The export is not valid JSON or does not match the document shapes
	#[error("invalid content export: {0}")]
	Parse(#[source] serde_json::Error),

	/// Same as [`ContentError::Parse`], for an export read from disk
	#[error("invalid content export {path}: {source}")]
	ParseFile {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A document has an empty `_id`
	#[error("{kind} document at index {index} has no _id")]
	MissingId { kind: &'static str, index: usize },

	/// Two documents of the same type share an `_id`
	#[error("duplicate {kind} document id '{id}'")]
	DuplicateId { kind: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;

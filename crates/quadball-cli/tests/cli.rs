// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Write;
use std::process::{Command, Output};

fn quadball(config: &std::path::Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_quadball"))
		.arg("--config")
		.arg(config)
		.args(args)
		.env_remove("RUST_LOG")
		.env_remove("QUADBALL_SITE_BASE_URL")
		.env_remove("QUADBALL_SITE_DATASET_PATH")
		.output()
		.expect("failed to run quadball")
}

fn site_config(toml: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(toml.as_bytes()).unwrap();
	file
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn alternate_of_root_is_french_root() {
	let config = site_config("");
	let output = quadball(config.path(), &["alternate", "/", "--to", "fr"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "/fr/\n");
}

#[test]
fn canonical_uses_configured_base_url() {
	let config = site_config("[site]\nbase_url = \"https://quadballcanada.ca\"\n");
	let output = quadball(config.path(), &["canonical", "/events"]);
	assert!(output.status.success());

	let links: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
	assert_eq!(links["canonical"], "https://quadballcanada.ca/events/");
	assert_eq!(links["alternates"][1]["href"], "https://quadballcanada.ca/fr/events/");
}

#[test]
fn invalid_config_fails() {
	let config = site_config("[site]\nbase_url = \"not a url\"\n");
	let output = quadball(config.path(), &["normalize", "/"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("site.base_url"));
}

#[test]
fn missing_dataset_fails() {
	let config = site_config("[site]\ndataset_path = \"/nonexistent/export.json\"\n");
	let output = quadball(config.path(), &["routes", "--section", "news", "--locale", "en"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/export.json"));
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod commands;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use quadball_site_config::{load_config, load_config_with_file};
use tracing::debug;

use commands::Command;

/// Locale, URL and route tooling for the Quadball Canada site
#[derive(Debug, Parser)]
#[command(name = "quadball", version)]
struct Cli {
	/// Config file (defaults to /etc/quadball/site.toml)
	#[arg(long, global = true, env = "QUADBALL_SITE_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => load_config_with_file(path)?,
		None => load_config()?,
	};
	logging::init_tracing(&config.logging, &config.i18n)?;
	debug!(base_url = %config.site.base_url, command = ?cli.command, "running command");

	let output = commands::run(cli.command, &config)?;
	println!("{output}");
	Ok(())
}

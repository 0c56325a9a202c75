// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! The `pkgdesc-build` binary.

// Setup warnings/errors:
#![forbid(unsafe_code)]
#![deny(
    bare_trait_objects,
    unused_doc_comments,
    unused_import_braces,
    missing_docs
)]
// Clippy:
#![warn(clippy::all, clippy::nursery, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::let_unit_value)]

use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{eyre, Result, WrapErr};

use pkgdesc_manifest::{FileResource, ManifestConfig};

// - Helper:
// ----------------------------------------------------------------------

#[derive(Debug, Parser)]
#[clap(
    name = "pkgdesc-build",
    about = "Validate a package configuration and emit its manifest."
)]
struct Args {
    /// the long description to use instead of the configured `readme`
    #[clap(long, value_name = "FILE")]
    readme: Option<PathBuf>,

    /// write the manifest into this file instead of stdout
    #[clap(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// fail if the manifest has any lint findings
    #[clap(long)]
    deny_warnings: bool,

    /// only validate, do not write the manifest anywhere
    #[clap(long)]
    check: bool,

    /// The package configuration (`.json` or `.toml`)
    #[clap(value_name = "CONFIG")]
    config: PathBuf,

    #[clap(flatten)]
    logging: pkgdesc_core::log::LogArgs,
}

fn config_directory(config_file: &Path) -> &Path {
    config_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn write_manifest(json: &str, output: &Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            tracing::debug!("Writing manifest to \"{}\".", path.display());
            std::fs::write(path, format!("{}\n", json)).wrap_err(eyre!(
                "Failed to write manifest to \"{}\".",
                path.display()
            ))
        }
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

// ----------------------------------------------------------------------
// - Entry Point:
// ----------------------------------------------------------------------

/// Entry point of the `pkgdesc-build` binary.
fn main() -> Result<()> {
    let args = Args::parse();

    args.logging
        .setup_logging()
        .wrap_err("Failed to set up logging.")?;

    tracing::debug!("Command line arguments: {:#?}", args);

    let config = ManifestConfig::from_file(&args.config)
        .wrap_err("Failed to load the package configuration.")?;

    let readme = args
        .readme
        .clone()
        .unwrap_or_else(|| config.readme_path(config_directory(&args.config)));

    let manifest = pkgdesc_manifest::build(&config, &FileResource::new(&readme)).wrap_err(
        eyre!(
            "Failed to build a manifest from \"{}\".",
            args.config.display()
        ),
    )?;
    tracing::info!("Built manifest for {}.", manifest);

    let findings = pkgdesc_manifest::lint(&manifest);
    for f in &findings {
        tracing::warn!("{}", f);
    }
    if args.deny_warnings && !findings.is_empty() {
        let summary: Vec<String> = findings.iter().map(ToString::to_string).collect();
        return Err(eyre!(
            "The manifest for {} has {} lint finding(s): {}",
            manifest,
            findings.len(),
            summary.join("; ")
        ));
    }

    if args.check {
        return Ok(());
    }

    let json = manifest.to_json()?;
    write_manifest(&json, &args.output)
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::config_directory;

    use std::path::Path;

    #[test]
    fn config_directory_of_bare_file() {
        assert_eq!(config_directory(Path::new("setup.toml")), Path::new("."));
        assert_eq!(
            config_directory(Path::new("src/tests/multihost/setup.toml")),
            Path::new("src/tests/multihost")
        );
    }
}

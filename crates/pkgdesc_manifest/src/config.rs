// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! The raw, unvalidated configuration a `PackageManifest` is built from

use pkgdesc_core::{Error, Result};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------
// - Constants:
// ----------------------------------------------------------------------

/// The long description resource used when a configuration names none.
pub const DEFAULT_README: &str = "README.rst";

/// The `package_data` key that applies to every sub-package.
pub const ALL_PACKAGES: &str = "";

// ----------------------------------------------------------------------
// - ManifestConfig:
// ----------------------------------------------------------------------

/// Configuration values for one package, as written by a user
///
/// Missing values default to empty, so that `build` can report them by
/// field name. Unknown option names are rejected while parsing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// The package `name`
    pub name: String,
    /// The package `version`
    pub version: String,
    /// A one line `description`
    pub description: String,
    /// The `author`
    pub author: String,
    /// The upstream `url`
    pub url: String,
    /// The installable sub-packages, in order
    #[serde(rename = "packages")]
    pub sub_packages: Vec<String>,
    /// The packages this package depends on
    #[serde(rename = "install_requires")]
    pub dependencies: Vec<String>,
    /// The `license` text
    pub license: String,
    /// Free-text `classifiers`, passed through as-is
    pub classifiers: Vec<String>,
    /// Glob patterns of data files per sub-package (`""` means all of them)
    pub package_data: BTreeMap<String, Vec<String>>,
    /// Path to the long description, relative to the configuration file
    pub readme: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            description: String::new(),
            author: String::new(),
            url: String::new(),
            sub_packages: Vec::new(),
            dependencies: Vec::new(),
            license: String::new(),
            classifiers: Vec::new(),
            package_data: BTreeMap::new(),
            readme: PathBuf::from(DEFAULT_README),
        }
    }
}

impl ManifestConfig {
    /// Parse a `ManifestConfig` from JSON
    ///
    /// # Errors
    /// Returns `Error::Config` if the JSON is invalid or has unknown keys.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| Error::Config(format!("Could not parse JSON configuration: {}", e)))
    }

    /// Parse a `ManifestConfig` from TOML
    ///
    /// # Errors
    /// Returns `Error::Config` if the TOML is invalid or has unknown keys.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input)
            .map_err(|e| Error::Config(format!("Could not parse TOML configuration: {}", e)))
    }

    /// Read a `ManifestConfig` from a `.json` or `.toml` file
    ///
    /// # Errors
    /// Returns `Error::Config` if the file can not be read, has an
    /// unsupported extension or fails to parse.
    #[tracing::instrument(level = "debug")]
    pub fn from_file(config_file: &Path) -> Result<Self> {
        let extension = config_file
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(Error::Config(format!(
                    "Configuration file \"{}\" must end in \".json\" or \".toml\".",
                    config_file.display()
                )))
            }
        };

        let contents = std::fs::read_to_string(config_file).map_err(|e| {
            Error::Config(format!(
                "Could not read configuration from \"{}\": {}",
                config_file.display(),
                e
            ))
        })?;

        parse(&contents).map_err(|e| match e {
            Error::Config(message) => {
                Error::Config(format!("\"{}\": {}", config_file.display(), message))
            }
            e => e,
        })
    }

    /// The path of the long description, resolved against `base_dir`
    #[must_use]
    pub fn readme_path(&self, base_dir: &Path) -> PathBuf {
        if self.readme.is_absolute() {
            self.readme.clone()
        } else {
            base_dir.join(&self.readme)
        }
    }
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

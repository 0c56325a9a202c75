// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! The validated `PackageManifest`

use pkgdesc_core::{Name, Names, Version};

use std::collections::BTreeMap;

// ----------------------------------------------------------------------
// - PackageManifest:
// ----------------------------------------------------------------------

/// A validated, immutable description of an installable package
///
/// The only way to get one is `crate::build`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PackageManifest {
    pub(crate) name: Name,
    pub(crate) version: Version,
    pub(crate) description: String,
    pub(crate) long_description: String,
    pub(crate) author: String,
    pub(crate) url: String,
    #[serde(rename = "packages")]
    pub(crate) sub_packages: Names,
    #[serde(rename = "install_requires")]
    pub(crate) dependencies: Vec<String>,
    pub(crate) license: String,
    pub(crate) classifiers: Vec<String>,
    pub(crate) package_data: BTreeMap<String, Vec<String>>,
}

impl PackageManifest {
    /// The package `name`
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The package `version`
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// The one line `description`
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The `long_description`, as read from the long description resource
    #[must_use]
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// The `author`
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The upstream `url`
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The installable sub-packages, in declaration order
    #[must_use]
    pub const fn sub_packages(&self) -> &Names {
        &self.sub_packages
    }

    /// The `dependencies`, in declaration order
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// The `license` text
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// The `classifiers`, exactly as configured
    #[must_use]
    pub fn classifiers(&self) -> &[String] {
        &self.classifiers
    }

    /// Data file glob patterns per sub-package
    #[must_use]
    pub const fn package_data(&self) -> &BTreeMap<String, Vec<String>> {
        &self.package_data
    }

    /// Data file glob patterns that apply to `package`
    ///
    /// This includes the patterns registered for all packages.
    pub fn data_patterns_for<'a>(&'a self, package: &'a Name) -> impl Iterator<Item = &'a str> {
        [crate::config::ALL_PACKAGES, package.as_str()]
            .into_iter()
            .filter_map(move |key| self.package_data.get(key))
            .flatten()
            .map(String::as_str)
    }

    /// Serialize the manifest into pretty-printed JSON
    ///
    /// # Errors
    /// Returns `Error::Runtime` if serialization fails.
    pub fn to_json(&self) -> pkgdesc_core::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| pkgdesc_core::Error::Runtime {
            message: format!("Failed to serialize manifest for {}: {}", self, e),
        })
    }
}

impl std::fmt::Display for PackageManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}@{}\"", self.name, self.version)
    }
}

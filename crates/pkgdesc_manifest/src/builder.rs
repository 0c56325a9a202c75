// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Turn a `ManifestConfig` into a `PackageManifest`

use crate::{ManifestConfig, PackageManifest, TextResource};

use pkgdesc_core::{Error, Name, Names, Result, Version};

use std::convert::TryFrom;

// ----------------------------------------------------------------------
// - Helper:
// ----------------------------------------------------------------------

fn invalid(field: &str, value: &str, message: String) -> Error {
    Error::InvalidManifest {
        field: field.to_string(),
        value: value.to_string(),
        message,
    }
}

fn verify_dependencies(dependencies: &[String]) -> Result<()> {
    match dependencies.iter().position(String::is_empty) {
        Some(index) => Err(invalid(
            "install_requires",
            "",
            format!("Dependency #{} is empty.", index + 1),
        )),
        None => Ok(()),
    }
}

fn verify_data_pattern(package: &str, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(invalid(
            "package_data",
            pattern,
            format!("Package \"{}\" has an empty file pattern.", package),
        ));
    }
    glob::Pattern::new(pattern).map_err(|e| {
        invalid(
            "package_data",
            pattern,
            format!(
                "Package \"{}\" has an invalid file pattern: {}",
                package, e
            ),
        )
    })?;
    Ok(())
}

fn verify_package_data(config: &ManifestConfig, sub_packages: &Names) -> Result<()> {
    for (package, patterns) in &config.package_data {
        if package != crate::config::ALL_PACKAGES {
            let known = Name::new(package).map_or(false, |n| sub_packages.contains(&n));
            if !known {
                return Err(invalid(
                    "package_data",
                    package,
                    "Data files can only be added to a listed package.".to_string(),
                ));
            }
        }
        for p in patterns {
            verify_data_pattern(package, p)?;
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------
// - Checked:
// ----------------------------------------------------------------------

/// The typed parts of a `ManifestConfig` that passed validation
struct Checked {
    name: Name,
    version: Version,
    sub_packages: Names,
}

impl Checked {
    fn new(config: &ManifestConfig) -> Result<Self> {
        let name = Name::new(&config.name).map_err(|e| e.for_field("name"))?;
        let version = Version::new(&config.version).map_err(|e| e.for_field("version"))?;
        let sub_packages =
            Names::try_from(&config.sub_packages[..]).map_err(|e| e.for_field("packages"))?;

        verify_dependencies(&config.dependencies)?;
        verify_package_data(config, &sub_packages)?;

        Ok(Self {
            name,
            version,
            sub_packages,
        })
    }
}

// ----------------------------------------------------------------------
// - API:
// ----------------------------------------------------------------------

/// Check all constraints on `config` without reading any resource
///
/// # Errors
/// Returns `Error::InvalidManifest` naming the first field that is invalid.
pub fn validate(config: &ManifestConfig) -> Result<()> {
    Checked::new(config).map(|_| ())
}

/// Build a `PackageManifest` from `config` and a long description
///
/// The configuration is validated before `long_description` is read, so
/// an invalid configuration never touches the resource.
///
/// # Errors
/// * `Error::InvalidManifest` when a constraint on `config` is violated
/// * `Error::ResourceRead` when `long_description` can not be read
#[tracing::instrument(level = "debug", skip_all, fields(name = %config.name, version = %config.version))]
pub fn build<R>(config: &ManifestConfig, long_description: &R) -> Result<PackageManifest>
where
    R: TextResource + ?Sized,
{
    let checked = Checked::new(config)?;
    tracing::trace!("Configuration is valid.");

    let long_description = long_description.read_text()?;
    tracing::debug!(
        "Read {} bytes of long description.",
        long_description.len()
    );

    Ok(PackageManifest {
        name: checked.name,
        version: checked.version,
        description: config.description.clone(),
        long_description,
        author: config.author.clone(),
        url: config.url.clone(),
        sub_packages: checked.sub_packages,
        dependencies: config.dependencies.clone(),
        license: config.license.clone(),
        classifiers: config.classifiers.clone(),
        package_data: config.package_data.clone(),
    })
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

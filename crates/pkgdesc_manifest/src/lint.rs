// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Non-fatal observations about a `PackageManifest`
//!
//! Linting never rejects a manifest: `build` already enforced everything
//! an installer relies on. Classifiers are deliberately left alone.

use crate::PackageManifest;

use itertools::Itertools;

// ----------------------------------------------------------------------
// - Finding:
// ----------------------------------------------------------------------

/// One observation about a field of a `PackageManifest`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// The manifest `field` this is about
    pub field: &'static str,
    /// What was found
    pub message: String,
}

impl Finding {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}`: {}", self.field, self.message)
    }
}

// ----------------------------------------------------------------------
// - Checks:
// ----------------------------------------------------------------------

fn check_texts(manifest: &PackageManifest, findings: &mut Vec<Finding>) {
    if manifest.description().is_empty() {
        findings.push(Finding::new("description", "No description given.".into()));
    }
    if manifest.long_description().trim().is_empty() {
        findings.push(Finding::new(
            "long_description",
            "The long description is empty.".into(),
        ));
    }
}

fn check_url(manifest: &PackageManifest, findings: &mut Vec<Finding>) {
    if manifest.url().is_empty() {
        findings.push(Finding::new("url", "No upstream url given.".into()));
    } else if let Err(e) = url::Url::parse(manifest.url()) {
        findings.push(Finding::new(
            "url",
            format!("\"{}\" is not a valid url: {}", manifest.url(), e),
        ));
    }
}

fn check_license(manifest: &PackageManifest, findings: &mut Vec<Finding>) {
    if manifest.license().is_empty() {
        findings.push(Finding::new("license", "No license given.".into()));
    } else if spdx::Expression::parse(manifest.license()).is_err() {
        findings.push(Finding::new(
            "license",
            format!(
                "\"{}\" is not an SPDX license expression.",
                manifest.license()
            ),
        ));
    }
}

fn check_dependencies(manifest: &PackageManifest, findings: &mut Vec<Finding>) {
    for d in manifest.dependencies().iter().duplicates() {
        findings.push(Finding::new(
            "install_requires",
            format!("\"{}\" is listed more than once.", d),
        ));
    }
}

fn check_nesting(manifest: &PackageManifest, findings: &mut Vec<Finding>) {
    let packages = manifest.sub_packages();
    for p in packages {
        if let Some(parent) = p.parent() {
            if !packages.contains(&parent) {
                findings.push(Finding::new(
                    "packages",
                    format!("\"{}\" is nested in \"{}\", which is not listed.", p, parent),
                ));
            }
        }
    }
}

// ----------------------------------------------------------------------
// - API:
// ----------------------------------------------------------------------

/// Collect all `Finding`s for `manifest`, in field order
#[tracing::instrument(level = "debug", skip_all, fields(manifest = %manifest))]
#[must_use]
pub fn lint(manifest: &PackageManifest) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_texts(manifest, &mut findings);
    check_url(manifest, &mut findings);
    check_nesting(manifest, &mut findings);
    check_dependencies(manifest, &mut findings);
    check_license(manifest, &mut findings);

    tracing::debug!("{} finding(s).", findings.len());
    findings
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Build validated package manifests from a configuration and a README.
//!
//! ```no_run
//! use pkgdesc_manifest::{build, FileResource, ManifestConfig};
//!
//! let config = ManifestConfig::from_file(std::path::Path::new("setup.toml"))?;
//! let readme = FileResource::new(&config.readme_path(std::path::Path::new(".")));
//! let manifest = build(&config, &readme)?;
//! println!("{}", manifest.to_json()?);
//! # Ok::<(), pkgdesc_manifest::Error>(())
//! ```

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
#![allow(clippy::non_ascii_literal, clippy::module_name_repetitions)]

// ----------------------------------------------------------------------
// - Error Handling:
// ----------------------------------------------------------------------

pub use pkgdesc_core::{Error, Result};

// ----------------------------------------------------------------------
// - Modules:
// ----------------------------------------------------------------------

mod builder;
pub mod config;
pub mod lint;
mod manifest;
pub mod resource;

// ----------------------------------------------------------------------
// - Exports:
// ----------------------------------------------------------------------

pub use builder::{build, validate};
pub use config::ManifestConfig;
pub use lint::{lint, Finding};
pub use manifest::PackageManifest;
pub use resource::{FileResource, StaticResource, TextResource};

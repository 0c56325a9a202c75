// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Readable text resources, e.g. the long description of a package

use pkgdesc_core::{Error, Result};

use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------
// - TextResource:
// ----------------------------------------------------------------------

/// Something a piece of text can be read from exactly once per `build`
pub trait TextResource {
    /// A human readable identifier used in error messages
    fn identifier(&self) -> String;

    /// Read the whole resource as UTF-8 text
    ///
    /// Any handle acquired for reading must be released before returning.
    ///
    /// # Errors
    /// Returns `Error::ResourceRead` if the resource is missing, unreadable
    /// or not valid UTF-8.
    fn read_text(&self) -> Result<String>;
}

// ----------------------------------------------------------------------
// - FileResource:
// ----------------------------------------------------------------------

/// A `TextResource` backed by a file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    /// Create a new `FileResource`
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// The `path` of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, message: String) -> Error {
        Error::ResourceRead {
            resource: self.identifier(),
            message,
        }
    }
}

impl TextResource for FileResource {
    fn identifier(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    #[tracing::instrument(level = "trace")]
    fn read_text(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| self.read_error(e.to_string()))?;
        tracing::trace!("Read {} bytes from \"{}\".", bytes.len(), self.path.display());

        String::from_utf8(bytes)
            .map_err(|e| self.read_error(format!("Contents are not valid UTF-8 text: {}", e)))
    }
}

// ----------------------------------------------------------------------
// - StaticResource:
// ----------------------------------------------------------------------

/// A `TextResource` for text that is already in memory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticResource {
    identifier: String,
    text: String,
}

impl StaticResource {
    /// Create a new `StaticResource` named `identifier` holding `text`
    #[must_use]
    pub fn new(identifier: &str, text: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            text: text.to_string(),
        }
    }
}

impl TextResource for StaticResource {
    fn identifier(&self) -> String {
        self.identifier.clone()
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

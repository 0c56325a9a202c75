// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

//! Basic functionality shared by all `pkgdesc` crates and binaries.

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

/// `Error` type for the `pkgdesc` libraries
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration Error
    #[error("Configuration Error: {}", .0)]
    Config(String),

    /// Conversion error.
    #[error("Conversion error: Can not convert \"{expression}\" to {typename}: {message}")]
    Conversion {
        /// The `expression` that could not get converted.
        expression: String,
        /// The `typename` that the `expression` failed to convert into.
        typename: String,
        /// A `message` describing why the conversion failed.
        message: String,
    },

    /// A manifest constraint was violated.
    #[error("Invalid manifest: `{field}` is invalid (\"{value}\"): {message}")]
    InvalidManifest {
        /// The configuration `field` that failed validation.
        field: String,
        /// The offending `value`.
        value: String,
        /// A `message` naming the constraint that failed.
        message: String,
    },

    /// A text resource could not be read.
    #[error("Resource error: Can not read \"{resource}\": {message}")]
    ResourceRead {
        /// The identifier of the `resource` that failed to read.
        resource: String,
        /// A `message` describing why reading failed.
        message: String,
    },

    /// IO Error
    #[error("IO Error: {source}")]
    Io {
        /// The `std::io::Error` triggering this
        #[from]
        source: std::io::Error,
    },

    /// Runtime Error
    #[error("Runtime Error: {message}")]
    Runtime {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Turn a `Conversion` error into an `InvalidManifest` error for `field`.
    ///
    /// Other errors are passed through unchanged.
    #[must_use]
    pub fn for_field(self, field: &str) -> Self {
        match self {
            Self::Conversion {
                expression,
                message,
                ..
            } => Self::InvalidManifest {
                field: field.to_string(),
                value: expression,
                message,
            },
            e => e,
        }
    }

    /// The name of the manifest field this error is about, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidManifest { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// `Result` type for the `pkgdesc` libraries
pub type Result<T> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------
// - Sub-Modules:
// ----------------------------------------------------------------------

pub mod log;

mod name;
pub use name::{Name, Names};

mod version;
pub use version::Version;

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn conversion_becomes_invalid_manifest() {
        let e = Error::Conversion {
            expression: String::new(),
            typename: "Name".to_string(),
            message: "Name can not be empty.".to_string(),
        }
        .for_field("name");

        assert_eq!(e.field(), Some("name"));
        assert!(e.to_string().contains("`name`"));
        assert!(e.to_string().contains("can not be empty"));
    }

    #[test]
    fn other_errors_pass_through() {
        let e = Error::ResourceRead {
            resource: "README.rst".to_string(),
            message: "gone".to_string(),
        }
        .for_field("name");

        assert!(matches!(e, Error::ResourceRead { .. }));
        assert_eq!(e.field(), None);
    }
}

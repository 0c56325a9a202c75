// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

// ----------------------------------------------------------------------
// - Version:
// ----------------------------------------------------------------------

/// A package `Version`
///
/// Any non-empty string is accepted: Ordering releases is up to the
/// installer consuming the manifest.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    /// Create a `Version` from a `&str`
    ///
    /// # Errors
    /// * `Error::Conversion`: When the input string is empty
    pub fn new(value: &str) -> crate::Result<Self> {
        if value.is_empty() {
            return Err(crate::Error::Conversion {
                expression: value.to_string(),
                typename: "Version".to_string(),
                message: "Package version can not be empty.".into(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The `Version` as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The upstream part of the `Version` (everything before the first '-')
    #[must_use]
    pub fn upstream(&self) -> &str {
        self.0.split_once('-').map_or(&self.0[..], |(u, _)| u)
    }

    /// The release part of the `Version` (everything after the first '-')
    #[must_use]
    pub fn release(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, r)| r)
    }
}

impl std::convert::From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl std::convert::TryFrom<&str> for Version {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::convert::TryFrom<String> for Version {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:}", self.0)
    }
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2020 Tobias Hunger <tobias.hunger@gmail.com>

use itertools::Itertools;

// ----------------------------------------------------------------------
// - Name:
// ----------------------------------------------------------------------

/// A package `Name`, e.g. `sssd.testlib.ipa`
///
/// Dotted names imply containment: `sssd.testlib.ipa` lives inside
/// `sssd.testlib`. That nesting is informational only.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a `Name` from a `&str`
    ///
    /// # Errors
    /// * `Error::Conversion`: When the input string is empty
    pub fn new(value: &str) -> crate::Result<Self> {
        if value.is_empty() {
            return Err(crate::Error::Conversion {
                expression: value.to_string(),
                typename: "Name".to_string(),
                message: "Package name can not be empty.".into(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The `Name` as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Name` this one is nested in, judging by its dotted path
    ///
    /// `sssd.testlib.ipa` yields `sssd.testlib`, `sssd` yields `None`.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('.')
            .and_then(|(parent, _)| Self::new(parent).ok())
    }
}

impl std::convert::From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl std::convert::TryFrom<&str> for Name {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::convert::TryFrom<String> for Name {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:}", &self.0)
    }
}

// ----------------------------------------------------------------------
// - Names:
// ----------------------------------------------------------------------

/// An ordered list of unique `Name`s
///
/// Insertion order is kept. Duplicates are rejected, never silently merged.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Names(Vec<Name>);

impl Names {
    /// Append a `Name` to the list
    ///
    /// # Errors
    /// * `Error::Conversion`: When `name` is already in the list
    pub fn push(&mut self, name: Name) -> crate::Result<&mut Self> {
        if self.contains(&name) {
            return Err(crate::Error::Conversion {
                expression: name.to_string(),
                typename: "Names".to_string(),
                message: format!("Duplicate entry \"{}\".", name),
            });
        }
        self.0.push(name);
        Ok(self)
    }

    /// Check whether a `Name` is in this list
    #[must_use]
    pub fn contains(&self, name: &Name) -> bool {
        self.0.contains(name)
    }

    /// Check whether there is at least one `Name`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the list of `Name`s
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the `Name`s in order
    pub fn iter(&self) -> std::slice::Iter<'_, Name> {
        self.0.iter()
    }
}

impl std::convert::From<Names> for Vec<String> {
    fn from(names: Names) -> Self {
        names.0.into_iter().map(String::from).collect()
    }
}

impl std::convert::From<Name> for Names {
    fn from(name: Name) -> Self {
        Self(vec![name])
    }
}

impl std::convert::TryFrom<&[String]> for Names {
    type Error = crate::Error;

    fn try_from(values: &[String]) -> Result<Self, Self::Error> {
        let mut result = Self(Vec::with_capacity(values.len()));
        for n in values {
            result.push(Name::try_from(&n[..])?)?;
        }
        Ok(result)
    }
}

impl std::convert::TryFrom<Vec<&str>> for Names {
    type Error = crate::Error;

    fn try_from(values: Vec<&str>) -> Result<Self, Self::Error> {
        let mut result = Self(Vec::with_capacity(values.len()));
        for n in values {
            result.push(Name::try_from(n)?)?;
        }
        Ok(result)
    }
}

impl std::convert::TryFrom<Vec<String>> for Names {
    type Error = crate::Error;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from(&values[..])
    }
}

impl std::fmt::Display for Names {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl<'a> IntoIterator for &'a Names {
    type Item = &'a Name;

    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ----------------------------------------------------------------------
// - Tests:
// ----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::{Name, Names};

    // Name:
    #[test]
    fn package_name_ok() {
        let name = Name::new("sssd").unwrap();
        assert_eq!(name, Name("sssd".to_string()));

        let name = Name::try_from("sssd.testlib.ipa").unwrap();
        assert_eq!(name.as_str(), "sssd.testlib.ipa");
    }

    #[test]
    fn package_name_not_ok() {
        assert!(Name::new("").is_err());
        assert!(Name::try_from(String::new()).is_err());
    }

    #[test]
    fn package_name_parent() {
        let name = Name::new("sssd.testlib.ipa").unwrap();
        assert_eq!(name.parent(), Some(Name::new("sssd.testlib").unwrap()));
        assert_eq!(
            name.parent().and_then(|p| p.parent()),
            Some(Name::new("sssd").unwrap())
        );
        assert_eq!(Name::new("sssd").unwrap().parent(), None);
        assert_eq!(Name::new(".hidden").unwrap().parent(), None);
    }

    #[test]
    fn package_name_conversion() {
        let name = Name::try_from("sssd.testlib").unwrap();
        assert_eq!(String::from(name), "sssd.testlib".to_string());
    }

    // Names:
    #[test]
    fn package_names_keep_order() {
        let names = Names::try_from(vec!["sssd", "sssd.testlib", "sssd.testlib.common"]).unwrap();
        assert_eq!(names.len(), 3);
        assert_eq!(
            Vec::<String>::from(names.clone()),
            vec!["sssd", "sssd.testlib", "sssd.testlib.common"]
        );
        assert_eq!(names.to_string(), "sssd sssd.testlib sssd.testlib.common");
    }

    #[test]
    fn package_names_reject_duplicates() {
        let err = Names::try_from(vec!["sssd.testlib", "sssd.testlib"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate entry \"sssd.testlib\""));

        let mut names = Names::from(Name::new("sssd").unwrap());
        assert!(names.push(Name::new("sssd").unwrap()).is_err());
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn package_names_reject_empty() {
        assert!(Names::try_from(vec!["sssd", ""]).is_err());
        assert!(Names::try_from(Vec::<&str>::new()).unwrap().is_empty());
    }

    #[test]
    fn package_names_serde() {
        let names: Names = serde_json::from_str(r#"["a", "a.b"]"#).unwrap();
        assert_eq!(names.len(), 2);
        assert!(serde_json::from_str::<Names>(r#"["a", "a"]"#).is_err());
        assert_eq!(serde_json::to_string(&names).unwrap(), r#"["a","a.b"]"#);
    }
}

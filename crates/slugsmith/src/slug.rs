use std::fmt;
use std::str::FromStr;

use crate::error::SlugError;
use crate::slugify::slugify;

/// A slug accepted for storage: not blank, no whitespace.
///
/// Content is otherwise free-form, so a hand-edited value such as
/// `My-Slug` is accepted as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>) -> Result<Self, SlugError> {
        let value = value.into();
        validate(&value)?;
        Ok(Self(value))
    }

    /// Slugify `title` and validate the result.
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        Self::parse(slugify(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Check `value` against the rules enforced by [`Slug::parse`].
pub fn validate(value: &str) -> Result<(), SlugError> {
    if value.trim().is_empty() {
        return Err(SlugError::Blank);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(SlugError::ContainsWhitespace);
    }
    Ok(())
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

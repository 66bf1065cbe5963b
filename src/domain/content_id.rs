//! Identifier of the video a market belongs to.

use core::fmt;

use crate::error::CurveError;

/// Content identifier keying a market on the ledger.
///
/// Any non-blank string is accepted; surrounding whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use blipp_curve::domain::ContentId;
///
/// let id = ContentId::new(" video-17 ").expect("non-empty");
/// assert_eq!(id.as_str(), "video-17");
/// assert!(ContentId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ContentId(String);

impl ContentId {
    /// Creates a new `ContentId`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidContentId`] if `value` is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CurveError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CurveError::InvalidContentId("content id must not be empty"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentId {
    type Error = CurveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentId> for String {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

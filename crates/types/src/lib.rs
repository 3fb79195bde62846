//! # threadview types
//!
//! Validated newtypes shared across the threadview crates.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Identifier of a single comment within a thread.
///
/// Comment identifiers are opaque: they are compared verbatim and never trimmed, so
/// `"abc"` and `" abc"` are distinct ids. The only requirement is that the id contains at
/// least one non-whitespace character, because it is used as the identity key of the
/// rendered block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(String);

impl CommentId {
    /// Creates a new `CommentId` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(CommentId)` if the input has non-whitespace content,
    /// or `Err(TextError::Empty)` otherwise.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let id = input.into();
        if id.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(id))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CommentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for CommentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CommentId::new(s).map_err(serde::de::Error::custom)
    }
}

use std::fmt;

/// Errors that can occur while loading site content.
///
/// Sanitizing text never fails; only building a [`PostCatalog`] or reading
/// content from JSON can.
///
/// [`PostCatalog`]: crate::PostCatalog
#[derive(Debug)]
pub enum Error {
    /// Content was parsed but broke a catalog rule
    Content(ContentError),
    /// Content could not be parsed as JSON
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Content(e) => write!(f, "Invalid content: {}", e),
            Error::Json(e) => write!(f, "Malformed content JSON: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Content(e) => Some(e),
            Error::Json(e) => Some(e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(e: ContentError) -> Self {
        Error::Content(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

/// A blog post that failed catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentError {
    kind: ContentErrorKind,
    slug: String,
    message: String,
}

impl ContentError {
    /// Creates a new content error for the post identified by `slug`.
    pub fn new(kind: ContentErrorKind, slug: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            slug: slug.into(),
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ContentErrorKind {
        self.kind
    }

    /// Returns the slug of the offending post.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in post '{}': {}", self.kind, self.slug, self.message)
    }
}

impl std::error::Error for ContentError {}

/// The rule a blog post broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentErrorKind {
    /// Slug is empty or has characters other than `a-z`, `0-9` and `-`
    InvalidSlug,
    /// Another post already uses this slug
    DuplicateSlug,
    /// Post has no tags
    MissingTags,
    /// Post title is empty
    MissingTitle,
}

impl fmt::Display for ContentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug => write!(f, "invalid slug"),
            Self::DuplicateSlug => write!(f, "duplicate slug"),
            Self::MissingTags => write!(f, "missing tags"),
            Self::MissingTitle => write!(f, "missing title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_display() {
        let error = ContentError::new(ContentErrorKind::DuplicateSlug, "hello-world", "seen twice");

        let output = error.to_string();
        assert!(output.contains("duplicate slug"));
        assert!(output.contains("hello-world"));
        assert!(output.contains("seen twice"));
    }

    #[test]
    fn error_wraps_content_error() {
        let error: Error = ContentError::new(ContentErrorKind::MissingTags, "x", "no tags").into();

        assert!(matches!(error, Error::Content(ref e) if e.kind() == ContentErrorKind::MissingTags));
        assert!(error.to_string().starts_with("Invalid content"));
    }

    #[test]
    fn error_wraps_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = Error::from(json_err);

        assert!(matches!(error, Error::Json(_)));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn error_kinds_display() {
        assert_eq!(ContentErrorKind::InvalidSlug.to_string(), "invalid slug");
        assert_eq!(ContentErrorKind::DuplicateSlug.to_string(), "duplicate slug");
        assert_eq!(ContentErrorKind::MissingTags.to_string(), "missing tags");
        assert_eq!(ContentErrorKind::MissingTitle.to_string(), "missing title");
    }
}

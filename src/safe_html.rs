use std::fmt;

/// Text that is safe to embed in an HTML document.
///
/// `SafeHtml` is produced by a [`Sanitizer`](crate::Sanitizer) or, for
/// content the site authored itself, by [`SafeHtml::trusted`]. There is no
/// `From<String>` so untrusted text cannot slip in by conversion.
///
/// # Examples
///
/// ```
/// use folio_text::{EscapeSanitizer, Sanitizer, Tainted};
///
/// let safe = EscapeSanitizer.sanitize(Tainted::new("1 < 2".to_string()));
/// assert_eq!(safe.to_string(), "1 &lt; 2");
/// assert_eq!(safe.into_string(), "1 &lt; 2");
/// ```
///
/// ```compile_fail
/// use folio_text::SafeHtml;
///
/// let html: SafeHtml = "<script>".to_string().into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeHtml {
    inner: String,
}

impl SafeHtml {
    /// Wraps output that a sanitizer has already made safe.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self { inner: value }
    }

    /// Marks structurally trusted markup, such as HTML rendered from the
    /// site's own markdown, as safe without altering it.
    ///
    /// The content passes through [`sanitize_html`](crate::sanitize_html)
    /// unchanged. Never use this for user-supplied text.
    pub fn trusted(content: impl Into<String>) -> Self {
        Self::new_unchecked(crate::sanitizer::sanitize_html(&content.into()))
    }

    /// Borrows the HTML.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the HTML.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

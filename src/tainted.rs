use std::fmt;

/// A wrapper for untrusted text that must go through a [`Sanitizer`] before
/// it reaches a renderer.
///
/// Blog comments, form fields and anything fetched from outside the site
/// belong in `Tainted`. The wrapped value cannot be read back out by code
/// outside this crate; the only way forward is a sanitizer, which produces
/// [`SafeHtml`].
///
/// [`Sanitizer`]: crate::Sanitizer
/// [`SafeHtml`]: crate::SafeHtml
///
/// # Examples
///
/// ```
/// use folio_text::{Sanitizer, Tainted, UserInputSanitizer};
///
/// let comment = Tainted::new("<b>nice</b> post & thanks".to_string());
/// let safe = UserInputSanitizer.sanitize(comment);
/// assert_eq!(safe.as_str(), "nice post &amp; thanks");
/// ```
// Do NOT add Deref, AsRef, Display or From<Tainted<T>> for T: any of them
// would let raw input reach a renderer without escaping.
#[derive(Clone)]
pub struct Tainted<T> {
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for sanitization.
    ///
    /// Only sanitizer implementations inside this crate call this.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}

use crate::markup::{Token, Tokens};
use crate::{SafeHtml, Tainted};

/// Escapes the five HTML-significant characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#x27;`. Every other character is copied as is.
///
/// Escaping is not idempotent: running it twice turns `&amp;` into
/// `&amp;amp;`. Escape once, at the point where text enters HTML.
///
/// # Examples
///
/// ```
/// use folio_text::escape_html;
///
/// assert_eq!(
///     escape_html("<script>alert(\"xss\")</script>"),
///     "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
/// );
/// assert_eq!(escape_html(""), "");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

/// Appends the escaped form of `text` to `out`, returning how many
/// characters were replaced.
fn escape_into(text: &str, out: &mut String) -> usize {
    let mut replaced = 0;
    let mut last = 0;

    for (i, byte) in text.bytes().enumerate() {
        let entity = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#x27;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
        replaced += 1;
    }

    out.push_str(&text[last..]);
    replaced
}

/// Removes every tag, comment and declaration, keeping the text between them.
///
/// Tag names are not checked against [`ALLOWED_TAGS`](crate::ALLOWED_TAGS);
/// `<p>` goes the same way as `<script>`, and the text inside both is kept.
/// A `<` that does not open well-formed markup stays in the output as text.
///
/// # Examples
///
/// ```
/// use folio_text::strip_tags;
///
/// assert_eq!(strip_tags("<div><p>Content</p></div>"), "Content");
/// assert_eq!(strip_tags("a < b"), "a < b");
/// ```
pub fn strip_tags(text: &str) -> String {
    strip_into(text).0
}

fn strip_into(text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut removed = 0;

    for token in Tokens::new(text) {
        match token {
            Token::Text(s) => out.push_str(s),
            Token::Tag(_) | Token::Comment(_) | Token::Declaration(_) => removed += 1,
        }
    }

    (out, removed)
}

/// Passes structurally trusted HTML through unchanged.
///
/// Use this for markup the site produced itself, such as rendered blog
/// content. It neither strips nor escapes.
///
/// # Examples
///
/// ```
/// use folio_text::sanitize_html;
///
/// let html = "<h1>Title</h1><p>Content</p>";
/// assert_eq!(sanitize_html(html), html);
/// ```
pub fn sanitize_html(text: &str) -> String {
    text.to_string()
}

/// Reduces untrusted input to escaped plain text.
///
/// Strips all markup with [`strip_tags`], then escapes what is left with
/// [`escape_html`].
///
/// # Examples
///
/// ```
/// use folio_text::sanitize_user_input;
///
/// assert_eq!(
///     sanitize_user_input("<script>alert(\"xss\")</script>Hello"),
///     "alert(&quot;xss&quot;)Hello"
/// );
/// assert_eq!(sanitize_user_input("<p>Hello & Goodbye</p>"), "Hello &amp; Goodbye");
/// ```
pub fn sanitize_user_input(text: &str) -> String {
    sanitize_user_input_with_stats(text).0
}

/// What [`sanitize_user_input_with_stats`] did to its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    /// Tags, comments and declarations removed.
    pub markup_removed: usize,
    /// Characters replaced by a character reference.
    pub escaped: usize,
}

impl SanitizeStats {
    /// Returns `true` if the input came through unchanged.
    pub fn is_clean(&self) -> bool {
        self.markup_removed == 0 && self.escaped == 0
    }
}

/// Like [`sanitize_user_input`], also reporting what was changed.
///
/// Emits a `debug` event when markup was removed. The input text itself is
/// never logged.
pub fn sanitize_user_input_with_stats(text: &str) -> (String, SanitizeStats) {
    let (stripped, markup_removed) = strip_into(text);

    let mut out = String::with_capacity(stripped.len());
    let escaped = escape_into(&stripped, &mut out);

    let stats = SanitizeStats {
        markup_removed,
        escaped,
    };

    if markup_removed > 0 {
        tracing::debug!(
            target: "folio_text::sanitizer",
            markup_removed,
            escaped,
            input_len = text.len(),
            "stripped markup from user input"
        );
    }

    (out, stats)
}

/// Turns tainted text into [`SafeHtml`].
///
/// Every implementation is total: sanitizing never fails, it only decides
/// how much of the input survives.
///
/// # Examples
///
/// ```
/// use folio_text::{EscapeSanitizer, SafeHtml, Sanitizer, Tainted, UserInputSanitizer};
///
/// fn render(sanitizer: &dyn Sanitizer, raw: &str) -> SafeHtml {
///     sanitizer.sanitize(Tainted::new(raw.to_string()))
/// }
///
/// assert_eq!(render(&EscapeSanitizer, "<b>hi</b>").as_str(), "&lt;b&gt;hi&lt;/b&gt;");
/// assert_eq!(render(&UserInputSanitizer, "<b>hi</b>").as_str(), "hi");
/// ```
pub trait Sanitizer {
    /// Sanitizes a tainted value.
    fn sanitize(&self, input: Tainted<String>) -> SafeHtml;
}

/// Escapes the input, leaving any markup visible as literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeSanitizer;

impl Sanitizer for EscapeSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> SafeHtml {
        SafeHtml::new_unchecked(escape_html(&input.into_inner()))
    }
}

/// Strips markup and escapes the remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserInputSanitizer;

impl Sanitizer for UserInputSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> SafeHtml {
        SafeHtml::new_unchecked(sanitize_user_input(&input.into_inner()))
    }
}

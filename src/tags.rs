/// Tag names considered safe to keep in rendered content.
///
/// The list is sorted and lowercase so lookups can use binary search. It is
/// exposed for callers that want to validate tag names themselves; the
/// stripping functions in this crate remove every tag and do not consult it.
///
/// # Examples
///
/// ```
/// use folio_text::{is_allowed_tag, ALLOWED_TAGS};
///
/// assert!(ALLOWED_TAGS.contains(&"p"));
/// assert!(is_allowed_tag("STRONG"));
/// assert!(!is_allowed_tag("script"));
/// ```
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "b",
    "blockquote",
    "br",
    "code",
    "div",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "span",
    "strong",
    "table",
    "tbody",
    "td",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Returns `true` if `name` is in [`ALLOWED_TAGS`], ignoring ASCII case.
pub fn is_allowed_tag(name: &str) -> bool {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        let lowered = name.to_ascii_lowercase();
        ALLOWED_TAGS.binary_search(&lowered.as_str()).is_ok()
    } else {
        ALLOWED_TAGS.binary_search(&name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_tags_sorted_and_lowercase() {
        assert!(ALLOWED_TAGS.windows(2).all(|w| w[0] < w[1]));
        assert!(ALLOWED_TAGS
            .iter()
            .all(|t| t.bytes().all(|b| !b.is_ascii_uppercase())));
    }

    #[test]
    fn includes_block_inline_and_code_elements() {
        for name in ["h1", "p", "div", "strong", "em", "a", "code", "pre"] {
            assert!(is_allowed_tag(name), "{name} should be allowed");
        }
    }

    #[test]
    fn excludes_script_and_style() {
        assert!(!is_allowed_tag("script"));
        assert!(!is_allowed_tag("style"));
        assert!(!is_allowed_tag("iframe"));
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(is_allowed_tag("DIV"));
        assert!(is_allowed_tag("Blockquote"));
        assert!(!is_allowed_tag("SCRIPT"));
    }

    #[test]
    fn empty_name_not_allowed() {
        assert!(!is_allowed_tag(""));
    }
}

//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Text containing none of `&`, `<`, `>`, `"` or `'`.
pub(crate) fn arb_plain_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[^&<>\"']{{0,{}}}", max_len))
        .expect("valid regex")
}

fn arb_tag() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just("p"),
            Just("div"),
            Just("script"),
            Just("a"),
            Just("img"),
            Just("STYLE"),
        ],
        prop_oneof![Just(""), Just("/")],
        prop_oneof![
            Just(""),
            Just(" class=\"x\""),
            Just(" title='a > b'"),
            Just(" /"),
        ],
    )
        .prop_map(|(name, slash, attrs)| format!("<{}{}{}>", slash, name, attrs))
}

/// Text interleaved with tags, comments and stray special characters.
pub(crate) fn arb_markup_text(max_len: usize) -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        arb_tag(),
        prop::string::string_regex("[a-z &<>\"']{0,12}").expect("valid regex"),
        Just("<!-- c -->".to_string()),
        Just("<".to_string()),
    ];
    prop::collection::vec(piece, 0..8).prop_map(move |pieces| {
        let mut joined = pieces.concat();
        // Cut on a char boundary; every piece is ASCII.
        joined.truncate(max_len.min(joined.len()));
        joined
    })
}

/// `true` if every special character in `s` is part of one of the five
/// character references produced by escaping.
pub(crate) fn has_no_raw_specials(s: &str) -> bool {
    const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"];

    let mut rest = s;
    while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
        let tail = &rest[pos..];
        match ENTITIES.iter().find(|e| tail.starts_with(*e)) {
            Some(entity) => rest = &tail[entity.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_special_detection() {
        assert!(has_no_raw_specials("a &amp; b &#x27;c&#x27;"));
        assert!(!has_no_raw_specials("a & b"));
        assert!(!has_no_raw_specials("&amp;<"));
    }
}

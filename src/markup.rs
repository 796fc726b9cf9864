use crate::tags::is_allowed_tag;

/// A single piece of markup-bearing text.
///
/// Concatenating [`Token::as_str`] for every token produced by [`Tokens`]
/// reproduces the original input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text, including any `<` that does not start well-formed markup.
    Text(&'a str),
    /// An opening, closing or self-closing element tag.
    Tag(Tag<'a>),
    /// An HTML comment, `<!-- ... -->`.
    Comment(&'a str),
    /// A markup declaration such as `<!DOCTYPE html>`.
    Declaration(&'a str),
}

impl<'a> Token<'a> {
    /// Returns the source text this token was read from.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(s) | Token::Comment(s) | Token::Declaration(s) => *s,
            Token::Tag(tag) => tag.source,
        }
    }

    /// Returns `true` for text tokens.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}

/// An element tag as it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    source: &'a str,
    name: &'a str,
    closing: bool,
    self_closing: bool,
}

impl<'a> Tag<'a> {
    /// The tag name with its original casing.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// `true` for `</name>`.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// `true` for `<name ... />`.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Whether the tag name is in [`ALLOWED_TAGS`](crate::ALLOWED_TAGS).
    pub fn is_allowed(&self) -> bool {
        is_allowed_tag(self.name)
    }

    /// The full source text of the tag, angle brackets included.
    pub fn as_str(&self) -> &'a str {
        self.source
    }
}

/// Iterator that splits text into [`Token`]s.
///
/// A `<` only starts a tag when it is followed by an optional `/`, a name
/// beginning with an ASCII letter, optional attributes and a closing `>`.
/// Quoted attribute values may contain `>` but not `<`. Anything else,
/// including an unterminated `<div`, is returned as text.
///
/// Tags and declarations never extend past the next `<`, and a failed
/// search for `-->` is remembered, so tokenizing is linear in the input
/// length.
///
/// # Examples
///
/// ```
/// use folio_text::{Token, Tokens};
///
/// let tokens: Vec<_> = Tokens::new("<p>a < b</p>").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Text("a < b"));
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
    // No `-->` follows any comment opener at or after this offset.
    no_comment_close_from: usize,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            no_comment_close_from: usize::MAX,
        }
    }

    /// Tries to read markup starting at `start`, returning the token and
    /// the byte offset just past it.
    fn parse_markup(&mut self, start: usize) -> Option<(Token<'a>, usize)> {
        let input = self.input;
        let bytes = input.as_bytes();
        if bytes.get(start) != Some(&b'<') {
            return None;
        }

        let rest = &input[start..];
        if rest.starts_with("<!--") {
            if start >= self.no_comment_close_from {
                return None;
            }
            return match rest[4..].find("-->") {
                Some(close) => {
                    let end = start + 4 + close + 3;
                    Some((Token::Comment(&input[start..end]), end))
                }
                None => {
                    self.no_comment_close_from = start;
                    None
                }
            };
        }

        if rest.starts_with("<!") {
            if !bytes.get(start + 2)?.is_ascii_alphabetic() {
                return None;
            }
            let limit = next_open_bracket(input, start);
            let close = input[start..limit].find('>')?;
            let end = start + close + 1;
            return Some((Token::Declaration(&input[start..end]), end));
        }

        parse_tag(input, start).map(|(tag, end)| (Token::Tag(tag), end))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        if start >= self.input.len() {
            return None;
        }

        if let Some((token, end)) = self.parse_markup(start) {
            self.pos = end;
            return Some(token);
        }

        // Text runs until the next `<` that opens real markup.
        let bytes = self.input.as_bytes();
        let mut cursor = start + 1;
        while cursor < bytes.len() {
            if bytes[cursor] == b'<' && self.parse_markup(cursor).is_some() {
                break;
            }
            cursor += 1;
        }
        self.pos = cursor;
        Some(Token::Text(&self.input[start..cursor]))
    }
}

/// Offset of the first `<` after `start`, or the input length.
fn next_open_bracket(input: &str, start: usize) -> usize {
    input[start + 1..]
        .find('<')
        .map_or(input.len(), |offset| start + 1 + offset)
}

fn parse_tag(input: &str, start: usize) -> Option<(Tag<'_>, usize)> {
    let bytes = input.as_bytes();
    let mut i = start + 1;

    let closing = bytes.get(i) == Some(&b'/');
    if closing {
        i += 1;
    }

    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    let name_start = i;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    let name = &input[name_start..i];

    // The name must be followed by whitespace, `/` or `>`.
    match *bytes.get(i)? {
        b'>' | b'/' => {}
        b if b.is_ascii_whitespace() => {}
        _ => return None,
    }

    let limit = next_open_bracket(input, start);
    let mut last_significant = None;
    while i < limit {
        match bytes[i] {
            b'>' => {
                let end = i + 1;
                let tag = Tag {
                    source: &input[start..end],
                    name,
                    closing,
                    self_closing: last_significant == Some(b'/'),
                };
                return Some((tag, end));
            }
            quote @ (b'"' | b'\'') => {
                let close = input[i + 1..limit].find(quote as char)?;
                i += close + 2;
                last_significant = Some(quote);
            }
            b if b.is_ascii_whitespace() => i += 1,
            b => {
                last_significant = Some(b);
                i += 1;
            }
        }
    }

    None
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

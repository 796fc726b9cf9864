//! Text handling for a personal portfolio and blog site.
//!
//! This crate provides:
//! - **Escaping**: the five HTML-significant characters become character
//!   references, nothing else changes
//! - **Tag stripping**: a tokenizer walks text as text/tag tokens and keeps
//!   only the text
//! - **Typed flow**: untrusted input is held in [`Tainted<T>`] and only
//!   becomes [`SafeHtml`] through a [`Sanitizer`]
//! - **Blog content**: a validated [`PostCatalog`] with date-sorted listings
//! - **LLM context files**: `llms.txt` and `llms-full.txt` rendering
//!
//! # Core Types
//!
//! - [`escape_html`], [`strip_tags`], [`sanitize_html`], [`sanitize_user_input`]
//! - [`Tokens`]: iterator over [`Token`]s of markup-bearing text
//! - [`ALLOWED_TAGS`]: tag names considered safe, for callers that check
//!   names themselves
//!
//! # Examples
//!
//! ```
//! use folio_text::{escape_html, sanitize_user_input, Sanitizer, Tainted, UserInputSanitizer};
//!
//! assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
//! assert_eq!(sanitize_user_input("<div><p>Content</p></div>"), "Content");
//!
//! let comment = Tainted::new("<img src=x onerror=alert(1)>hi".to_string());
//! let safe = UserInputSanitizer.sanitize(comment);
//! assert_eq!(safe.as_str(), "hi");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blog;
mod error;
mod llms;
mod markup;
mod safe_html;
mod sanitizer;
mod tags;
mod tainted;

#[cfg(test)]
mod test_utils;

pub use blog::{BlogPost, PostCatalog};
pub use error::{ContentError, ContentErrorKind, Error};
pub use llms::{
    render_llms_full_txt, render_llms_txt, write_llms_full_txt, write_llms_txt, Project,
    SiteProfile, Socials,
};
pub use markup::{Tag, Token, Tokens};
pub use safe_html::SafeHtml;
pub use sanitizer::{
    escape_html, sanitize_html, sanitize_user_input, sanitize_user_input_with_stats, strip_tags,
    EscapeSanitizer, SanitizeStats, Sanitizer, UserInputSanitizer,
};
pub use tags::{is_allowed_tag, ALLOWED_TAGS};
pub use tainted::Tainted;

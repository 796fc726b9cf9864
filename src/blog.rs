use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ContentError, ContentErrorKind, Error};

/// A single blog post.
///
/// Deserializes from the camelCase JSON the site's content files use, with
/// `date` written as `YYYY-MM-DD` and `draft` defaulting to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// URL segment under `/blog/`
    pub slug: String,
    /// Post title
    pub title: String,
    /// One-line summary shown in listings
    pub description: String,
    /// Publication date
    pub date: NaiveDate,
    /// Topic tags; at least one
    pub tags: Vec<String>,
    /// Markdown body
    pub content: String,
    /// Human-readable estimate, e.g. `"8 min read"`
    pub reading_time: String,
    /// Hidden from listings but reachable by slug
    #[serde(default)]
    pub draft: bool,
}

impl BlogPost {
    /// Site-relative URL of the post.
    pub fn url_path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if !is_valid_slug(&self.slug) {
            return Err(ContentError::new(
                ContentErrorKind::InvalidSlug,
                &self.slug,
                "slug must be non-empty and contain only a-z, 0-9 and '-'",
            ));
        }
        if self.title.trim().is_empty() {
            return Err(ContentError::new(
                ContentErrorKind::MissingTitle,
                &self.slug,
                "title is empty",
            ));
        }
        if self.tags.is_empty() {
            return Err(ContentError::new(
                ContentErrorKind::MissingTags,
                &self.slug,
                "post needs at least one tag",
            ));
        }
        Ok(())
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// A validated set of blog posts.
///
/// Posts keep the order they were given in; listings sort copies of the
/// references, never the catalog itself.
///
/// # Examples
///
/// ```
/// use folio_text::PostCatalog;
///
/// let catalog = PostCatalog::from_json(r#"[
///     {"slug": "older", "title": "Older", "description": "", "date": "2025-01-01",
///      "tags": ["misc"], "content": "", "readingTime": "1 min read"},
///     {"slug": "newer", "title": "Newer", "description": "", "date": "2025-06-01",
///      "tags": ["misc"], "content": "", "readingTime": "1 min read"},
///     {"slug": "wip", "title": "WIP", "description": "", "date": "2025-07-01",
///      "tags": ["misc"], "content": "", "readingTime": "1 min read", "draft": true}
/// ]"#).unwrap();
///
/// let listed: Vec<_> = catalog.all_posts().iter().map(|p| p.slug.as_str()).collect();
/// assert_eq!(listed, ["newer", "older"]);
/// assert!(catalog.get_post_by_slug("wip").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PostCatalog {
    posts: Vec<BlogPost>,
}

impl PostCatalog {
    /// Validates `posts` and builds a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] for the first post with an invalid or
    /// duplicate slug, an empty title or no tags.
    pub fn new(posts: Vec<BlogPost>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(posts.len());

        for post in &posts {
            let checked = post.validate().and_then(|()| {
                if seen.insert(post.slug.as_str()) {
                    Ok(())
                } else {
                    Err(ContentError::new(
                        ContentErrorKind::DuplicateSlug,
                        &post.slug,
                        "slug is used by an earlier post",
                    ))
                }
            });

            if let Err(e) = checked {
                tracing::warn!(
                    target: "folio_text::blog",
                    slug = %e.slug(),
                    kind = %e.kind(),
                    "rejected blog post"
                );
                return Err(e.into());
            }
        }

        tracing::debug!(
            target: "folio_text::blog",
            posts = posts.len(),
            drafts = posts.iter().filter(|p| p.draft).count(),
            "loaded post catalog"
        );

        Ok(Self { posts })
    }

    /// Parses a JSON array of posts and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the JSON does not describe a list of posts,
    /// or any error from [`PostCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let posts: Vec<BlogPost> = serde_json::from_str(json)?;
        Self::new(posts)
    }

    /// All posts in their original order, drafts included.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Number of posts, drafts included.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the catalog has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Looks up a post by exact slug. Drafts are returned too.
    pub fn get_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Published posts, newest first.
    pub fn all_posts(&self) -> Vec<&BlogPost> {
        newest_first(self.posts.iter().filter(|post| !post.draft))
    }

    /// Every post including drafts, newest first.
    pub fn all_posts_including_drafts(&self) -> Vec<&BlogPost> {
        newest_first(self.posts.iter())
    }

    /// Published posts carrying `tag`, newest first.
    pub fn posts_tagged(&self, tag: &str) -> Vec<&BlogPost> {
        newest_first(
            self.posts
                .iter()
                .filter(|post| !post.draft && post.tags.iter().any(|t| t == tag)),
        )
    }
}

// Stable sort: posts sharing a date keep catalog order.
fn newest_first<'a>(posts: impl Iterator<Item = &'a BlogPost>) -> Vec<&'a BlogPost> {
    let mut sorted: Vec<&BlogPost> = posts.collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

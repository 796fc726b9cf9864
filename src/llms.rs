//! `llms.txt` and `llms-full.txt` generation.
//!
//! Both documents are markdown meant for LLM context retrieval. They are
//! plain text, so nothing here escapes HTML.

use std::fmt::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::{BlogPost, Error, PostCatalog};

/// Who the site belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    /// Site name used as the document title, e.g. a domain
    pub site_name: String,
    /// Owner's full name
    pub name: String,
    /// Short professional tagline
    pub tagline: String,
    /// Paragraph about the owner
    pub summary: String,
    /// Where the owner is based
    #[serde(default)]
    pub location: String,
    /// Contact links
    pub socials: Socials,
    /// Skill keywords
    #[serde(default)]
    pub skills: Vec<String>,
    /// Certification names
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Showcased projects
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Contact links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Socials {
    /// Contact email
    pub email: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// GitHub profile URL
    pub github: String,
}

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Project URL
    pub url: String,
    /// Owner's role on the project
    pub role: String,
    /// One-line description
    pub description: String,
}

impl SiteProfile {
    /// Parses a profile from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if required fields are missing or mistyped.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Renders the short `llms.txt` index.
///
/// # Examples
///
/// ```
/// use folio_text::{render_llms_txt, PostCatalog, SiteProfile};
///
/// let site = SiteProfile {
///     site_name: "example.dev".to_string(),
///     name: "Ada".to_string(),
///     ..SiteProfile::default()
/// };
/// let catalog = PostCatalog::new(Vec::new()).unwrap();
///
/// let text = render_llms_txt(&site, &catalog);
/// assert!(text.starts_with("# example.dev\n"));
/// assert!(text.contains("## Blog Posts"));
/// ```
pub fn render_llms_txt(site: &SiteProfile, catalog: &PostCatalog) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_llms_txt(&mut out, site, catalog);
    out
}

/// Renders `llms-full.txt`, which carries every published post's body.
pub fn render_llms_full_txt(
    site: &SiteProfile,
    catalog: &PostCatalog,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_llms_full_txt(&mut out, site, catalog, generated_at);
    out
}

/// Writes the `llms.txt` index to `out`.
pub fn write_llms_txt<W: Write>(
    out: &mut W,
    site: &SiteProfile,
    catalog: &PostCatalog,
) -> fmt::Result {
    writeln!(out, "# {}", site.site_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "> Personal portfolio and blog of {} - {}.",
        site.name, site.tagline
    )?;
    writeln!(out)?;
    writeln!(out, "## About {}", site.name)?;
    writeln!(out)?;
    writeln!(out, "{}", site.summary)?;
    writeln!(out)?;
    write_contact(out, site)?;
    writeln!(out)?;

    writeln!(out, "## Blog Posts")?;
    writeln!(out)?;
    for post in catalog.all_posts() {
        writeln!(out, "{}", index_line(post))?;
    }
    writeln!(out)?;

    writeln!(out, "## Projects")?;
    writeln!(out)?;
    for p in &site.projects {
        writeln!(out, "- [{}]({}): {} - {}", p.name, p.url, p.role, p.description)?;
    }
    writeln!(out)?;

    writeln!(out, "## Technical Skills")?;
    writeln!(out)?;
    writeln!(out, "{}", site.skills.join(", "))?;
    writeln!(out)?;

    writeln!(out, "## Certifications")?;
    writeln!(out)?;
    for c in &site.certifications {
        writeln!(out, "- {}", c)?;
    }

    tracing::debug!(target: "folio_text::llms", document = "llms.txt", "rendered");
    Ok(())
}

/// Writes `llms-full.txt` to `out`.
pub fn write_llms_full_txt<W: Write>(
    out: &mut W,
    site: &SiteProfile,
    catalog: &PostCatalog,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(out, "# {} - Full Content for LLM Context", site.site_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "> This file contains the complete content of {} for AI/LLM context retrieval.",
        site.site_name
    )?;
    writeln!(
        out,
        "> Last updated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;

    writeln!(out, "# About {}", site.name)?;
    writeln!(out)?;
    writeln!(out, "**Name**: {}", site.name)?;
    if !site.location.is_empty() {
        writeln!(out, "**Location**: {}", site.location)?;
    }
    writeln!(out, "**Tagline**: {}", site.tagline)?;
    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out)?;
    writeln!(out, "{}", site.summary)?;
    writeln!(out)?;
    write_contact(out, site)?;
    writeln!(out)?;

    writeln!(out, "## Technical Skills")?;
    writeln!(out)?;
    for s in &site.skills {
        writeln!(out, "- {}", s)?;
    }
    writeln!(out)?;

    writeln!(out, "## Certifications")?;
    writeln!(out)?;
    for c in &site.certifications {
        writeln!(out, "- {}", c)?;
    }
    writeln!(out)?;

    writeln!(out, "## Projects Portfolio")?;
    for p in &site.projects {
        writeln!(out)?;
        writeln!(out, "### {}", p.name)?;
        writeln!(out, "**Role**: {}", p.role)?;
        writeln!(out, "**URL**: {}", p.url)?;
        writeln!(out)?;
        writeln!(out, "{}", p.description)?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;

    writeln!(out, "# Blog Posts")?;
    let posts = catalog.all_posts();
    for post in &posts {
        write_full_post(out, post)?;
    }

    tracing::debug!(
        target: "folio_text::llms",
        document = "llms-full.txt",
        posts = posts.len(),
        "rendered"
    );
    Ok(())
}

fn write_contact<W: Write>(out: &mut W, site: &SiteProfile) -> fmt::Result {
    writeln!(out, "### Contact")?;
    writeln!(out, "- Email: {}", site.socials.email)?;
    writeln!(out, "- LinkedIn: {}", site.socials.linkedin)?;
    writeln!(out, "- GitHub: {}", site.socials.github)
}

fn index_line(post: &BlogPost) -> String {
    let mut line = format!("- [{}]({}): {}", post.title, post.url_path(), post.description);
    if !post.tags.is_empty() {
        line.push_str(" Tags: ");
        line.push_str(&post.tags.join(", "));
    }
    line
}

fn write_full_post<W: Write>(out: &mut W, post: &BlogPost) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "## {}", post.title)?;
    writeln!(out)?;
    writeln!(out, "**URL**: {}", post.url_path())?;
    writeln!(out, "**Date**: {}", post.date.format("%Y-%m-%d"))?;
    writeln!(out, "**Tags**: {}", post.tags.join(", "))?;
    writeln!(out, "**Reading Time**: {}", post.reading_time)?;
    writeln!(out)?;
    writeln!(out, "{}", post.description)?;
    writeln!(out)?;
    writeln!(out, "### Content")?;
    writeln!(out)?;
    writeln!(out, "{}", post.content.trim())?;
    writeln!(out)?;
    writeln!(out, "---")
}

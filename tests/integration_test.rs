use folio_text::{
    escape_html, render_llms_txt, sanitize_html, sanitize_user_input, ContentErrorKind, Error,
    EscapeSanitizer, PostCatalog, SafeHtml, Sanitizer, SiteProfile, Tainted, UserInputSanitizer,
    ALLOWED_TAGS,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn documented_examples_hold() {
    assert_eq!(escape_html(""), "");
    assert_eq!(
        escape_html("<script>alert(\"xss\")</script>"),
        "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
    );
    assert_eq!(sanitize_user_input("<div><p>Content</p></div>"), "Content");
    assert_eq!(
        sanitize_user_input("<script>alert(\"xss\")</script>Hello"),
        "alert(&quot;xss&quot;)Hello"
    );

    let trusted = "<h1>Title</h1><p>Content</p>";
    assert_eq!(sanitize_html(trusted), trusted);
}

#[test]
fn double_escaping_is_expected() {
    let s = "R&D <team>";
    let once = escape_html(s);
    let twice = escape_html(&once);

    // Not a bug: escaping is applied once per boundary.
    assert_ne!(once, twice);
    assert_eq!(twice, "R&amp;amp;D &amp;lt;team&amp;gt;");
}

#[test]
fn tainted_input_only_reaches_output_through_sanitizer() {
    init_tracing();
    let raw = "<a href=\"javascript:alert(1)\">click</a> & run";

    let shown_as_text = EscapeSanitizer.sanitize(Tainted::new(raw.to_string()));
    let reduced = UserInputSanitizer.sanitize(Tainted::new(raw.to_string()));

    assert!(!shown_as_text.as_str().contains('<'));
    assert_eq!(reduced.as_str(), "click &amp; run");

    // Does not compile: Tainted has no conversion to String.
    // let _s: String = Tainted::new(raw.to_string()).into();
}

#[test]
fn trusted_html_is_untouched() {
    let rendered = SafeHtml::trusted("<pre><code>let x = 1 &lt; 2;</code></pre>");
    assert_eq!(rendered.as_str(), "<pre><code>let x = 1 &lt; 2;</code></pre>");
}

#[test]
fn rejected_catalog_reports_slug() {
    init_tracing();
    let err = PostCatalog::from_json(
        r#"[{"slug": "Bad Slug", "title": "T", "description": "", "date": "2025-01-01",
             "tags": ["a"], "content": "", "readingTime": ""}]"#,
    )
    .unwrap_err();

    match err {
        Error::Content(e) => {
            assert_eq!(e.kind(), ContentErrorKind::InvalidSlug);
            assert_eq!(e.slug(), "Bad Slug");
        }
        other => panic!("expected content error, got {}", other),
    }
}

#[test]
fn allowed_tags_do_not_affect_stripping() {
    assert!(ALLOWED_TAGS.contains(&"strong"));
    assert_eq!(sanitize_user_input("<strong>bold</strong>"), "bold");
}

#[test]
fn catalog_feeds_llms_index() {
    init_tracing();
    let catalog = PostCatalog::from_json(
        r#"[
            {"slug": "hello-world", "title": "Hello, World!", "description": "Intro",
             "date": "2025-12-30", "tags": ["personal"], "content": "Hi",
             "readingTime": "1 min read"},
            {"slug": "later", "title": "Later", "description": "Second",
             "date": "2026-01-02", "tags": ["rust"], "content": "More",
             "readingTime": "3 min read"}
        ]"#,
    )
    .expect("valid catalog");
    let site = SiteProfile::from_json(
        r#"{"siteName": "example.dev", "name": "Ada", "tagline": "Engineer",
            "summary": "Hi.", "socials": {"email": "a@example.dev",
            "linkedin": "https://linkedin.com/in/a", "github": "https://github.com/a"}}"#,
    )
    .expect("valid profile");

    let text = render_llms_txt(&site, &catalog);
    let later = text.find("[Later]").expect("later listed");
    let hello = text.find("[Hello, World!]").expect("hello listed");
    assert!(later < hello, "newest post comes first");
}

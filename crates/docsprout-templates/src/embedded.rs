//! Template sources embedded at compile time.
//!
//! Paths are relative to this file; a wrong path fails the build.

pub const INDEX_HTML: &str = include_str!("../templates/index.html");
pub const COVERPAGE: &str = include_str!("../templates/coverpage.md");
pub const PRODUCT_OVERVIEW: &str = include_str!("../templates/product_overview.md");
pub const QUICK_START: &str = include_str!("../templates/quick_start.md");
pub const RELEASE_NOTES: &str = include_str!("../templates/release_notes.md");
pub const SIDEBAR: &str = include_str!("../templates/sidebar.md");
pub const RELEASE_ONE: &str = include_str!("../templates/release_one.md");
pub const RELEASE_TWO: &str = include_str!("../templates/release_two.md");
pub const CONCEPT_ONE: &str = include_str!("../templates/concept_one.md");
pub const CONCEPT_TWO: &str = include_str!("../templates/concept_two.md");

/// Stylesheet copied verbatim to `styles/override.css`.
pub const STYLESHEET: &str = include_str!("../templates/styles/override.css");

/// Every named partial, in registration order.
pub const PARTIALS: &[(&str, &str)] = &[
    ("indexhtml", INDEX_HTML),
    ("coverpage", COVERPAGE),
    ("product_overview", PRODUCT_OVERVIEW),
    ("quick_start", QUICK_START),
    ("releases_notes", RELEASE_NOTES),
    ("sidebar", SIDEBAR),
    ("release_one", RELEASE_ONE),
    ("release_two", RELEASE_TWO),
    ("concept_one", CONCEPT_ONE),
    ("concept_two", CONCEPT_TWO),
];

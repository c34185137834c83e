//! The fixed layout of a scaffolded docs folder.

/// File whose presence marks a docs root as initialized.
pub const MARKER_FILE: &str = "index.html";

/// Landing page left behind by the generator's bootstrap, removed after it runs.
pub const PLACEHOLDER_FILE: &str = "README.md";

/// Directories created under every docs root.
pub const SKELETON_DIRS: &[&str] = &["content/releases", "content/concepts", "static", "styles"];

/// Context handed to a partial when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    /// No context
    Empty,
    /// `name` and `repo`
    Home,
    /// `name`, `version` and `description`
    Cover,
}

/// Where the content of a generated file comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A named partial
    Partial {
        name: &'static str,
        context: PageContext,
    },
    /// The bundled stylesheet, copied as is
    Stylesheet,
}

/// One entry of the template set.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub source: Source,
    /// Output paths relative to the docs root
    pub outputs: &'static [&'static str],
}

const fn partial(
    name: &'static str,
    context: PageContext,
    outputs: &'static [&'static str],
) -> TemplateEntry {
    TemplateEntry {
        source: Source::Partial { name, context },
        outputs,
    }
}

/// Everything written on first initialization, in write order.
pub const TEMPLATE_SET: &[TemplateEntry] = &[
    partial("indexhtml", PageContext::Home, &["index.html"]),
    partial("coverpage", PageContext::Cover, &["_coverpage.md"]),
    partial(
        "product_overview",
        PageContext::Empty,
        &["content/product_overview.md"],
    ),
    partial("quick_start", PageContext::Empty, &["content/quick_start.md"]),
    partial(
        "releases_notes",
        PageContext::Empty,
        &["content/release_notes.md"],
    ),
    partial(
        "sidebar",
        PageContext::Empty,
        &[
            "_sidebar.md",
            "content/_sidebar.md",
            "content/concepts/_sidebar.md",
            "content/releases/_sidebar.md",
        ],
    ),
    TemplateEntry {
        source: Source::Stylesheet,
        outputs: &["styles/override.css"],
    },
    partial("release_one", PageContext::Empty, &["content/releases/0.0.0.md"]),
    partial("release_two", PageContext::Empty, &["content/releases/0.0.1.md"]),
    partial(
        "concept_one",
        PageContext::Empty,
        &["content/concepts/concept_one.md"],
    ),
    partial(
        "concept_two",
        PageContext::Empty,
        &["content/concepts/concept_two.md"],
    ),
];

/// Every file path written on first initialization, relative to the docs root.
pub fn generated_files() -> impl Iterator<Item = &'static str> {
    TEMPLATE_SET.iter().flat_map(|entry| entry.outputs.iter().copied())
}

//! Section identifiers.
//!
//! A section identifier names a content section of the portfolio page, or a
//! synthetic interaction area. Any string is accepted verbatim so the UI layer
//! can introduce new sections without touching the tracker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section the page opens on.
pub const DEFAULT_SECTION: &str = "hero";

/// Synthetic identifier recorded when the decorative data-cube cluster is
/// clicked. Not a real page section.
pub const SKILLS_KNOT: &str = "skills_knot";

/// Sections rendered by the portfolio page, in page order.
pub const KNOWN_SECTIONS: &[&str] = &[
    "hero",
    "about",
    "education",
    "experience",
    "skills",
    "projects",
    "contact",
];

/// Identifier of a viewed section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section identifier from any string, without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default section (`hero`).
    pub fn default_section() -> Self {
        Self::new(DEFAULT_SECTION)
    }

    /// The synthetic data-cube interaction token.
    pub fn skills_knot() -> Self {
        Self::new(SKILLS_KNOT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// True for identifiers that do not name a page section.
    pub fn is_synthetic(&self) -> bool {
        self.0 == SKILLS_KNOT
    }

    /// True for sections the page is known to render.
    pub fn is_known(&self) -> bool {
        KNOWN_SECTIONS.contains(&self.0.as_str())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::default_section()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

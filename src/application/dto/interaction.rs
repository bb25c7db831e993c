//! UI interaction events.
//!
//! The page's click and navigation handlers report what the visitor did;
//! the dispatcher turns that into a section identifier.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SectionId;

/// Something the visitor did that focuses a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum UiInteraction {
    /// A section node in the 3D scene was clicked
    SectionNodeClicked(SectionId),

    /// A section was selected through the menu or scroll navigation
    NavigationSelected(SectionId),

    /// The decorative data-cube cluster was clicked
    DataCubeClicked,
}

impl UiInteraction {
    /// Parse the host's line format.
    ///
    /// - `cube` -> `DataCubeClicked`
    /// - `node:<id>` -> `SectionNodeClicked`
    /// - `nav:<id>` or any other text -> `NavigationSelected`
    ///
    /// Never fails; unrecognized text is taken as a section id verbatim.
    pub fn parse(line: &str) -> Self {
        if line == "cube" {
            Self::DataCubeClicked
        } else if let Some(id) = line.strip_prefix("node:") {
            Self::SectionNodeClicked(SectionId::new(id))
        } else if let Some(id) = line.strip_prefix("nav:") {
            Self::NavigationSelected(SectionId::new(id))
        } else {
            Self::NavigationSelected(SectionId::new(line))
        }
    }

    /// The section this interaction focuses.
    pub fn section(&self) -> SectionId {
        match self {
            Self::SectionNodeClicked(id) | Self::NavigationSelected(id) => id.clone(),
            Self::DataCubeClicked => SectionId::skills_knot(),
        }
    }
}

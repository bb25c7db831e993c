//! Host environment flags captured when the page starts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only description of the page environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFlags {
    pub theme: Theme,

    /// Whether the 3D background scene is running
    pub scene_active: bool,
}

impl EnvironmentFlags {
    pub fn new(theme: Theme, scene_active: bool) -> Self {
        Self {
            theme,
            scene_active,
        }
    }
}

impl Default for EnvironmentFlags {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            scene_active: true,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use vault_core::ViewModePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    /// Cards per rendered row.
    pub fn columns(self) -> usize {
        match self {
            ViewMode::Grid => 2,
            ViewMode::List => 1,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl From<ViewModePreference> for ViewMode {
    fn from(pref: ViewModePreference) -> Self {
        match pref {
            ViewModePreference::Grid => ViewMode::Grid,
            ViewModePreference::List => ViewMode::List,
        }
    }
}

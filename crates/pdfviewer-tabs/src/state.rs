//! Per-instance tab state
//!
//! ```text
//! Inactive  <──sync──>  Active(index)
//! ```
//!
//! Every transition is a full recomputation from the page signal; an
//! instance keeps no memory of the tab it showed before.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum TabState {
    /// The tab at this position is shown
    Active(usize),
    /// No tab is active and no document is shown
    #[default]
    Inactive,
}

impl TabState {
    pub fn from_index(index: Option<usize>) -> Self {
        match index {
            Some(i) => TabState::Active(i),
            None => TabState::Inactive,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            TabState::Active(i) => Some(*i),
            TabState::Inactive => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active(_) => "active",
            TabState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabState::Active(i) => write!(f, "active({})", i),
            TabState::Inactive => f.write_str("inactive"),
        }
    }
}

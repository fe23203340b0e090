//! Board list ordering.
//!
//! The criterion comes from the persisted sort preference; both board
//! collections are sorted independently with the same criterion.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::board::Board;
use boards_core::config::{SORT_BY_DATE_MODIFIED, SORT_BY_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSort {
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Date Modified")]
    DateModified,
}

impl Default for BoardSort {
    fn default() -> Self {
        Self::Name
    }
}

impl BoardSort {
    /// Parse the persisted preference string; anything unrecognized falls
    /// back to name order.
    pub fn from_preference(name: &str) -> Self {
        if name == SORT_BY_DATE_MODIFIED {
            Self::DateModified
        } else {
            Self::Name
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => SORT_BY_NAME,
            Self::DateModified => SORT_BY_DATE_MODIFIED,
        }
    }

    pub fn compare(&self, a: &Board, b: &Board) -> Ordering {
        match self {
            Self::Name => a.title.cmp(&b.title),
            Self::DateModified => a.modified_date.cmp(&b.modified_date),
        }
    }

    /// Stable in-place sort, so equal keys keep their relative order.
    pub fn sort(&self, boards: &mut [Board]) {
        boards.sort_by(|a, b| self.compare(a, b));
    }
}

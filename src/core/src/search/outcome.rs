use crate::search::{SearchError, SearchResultItem};
use serde::Serialize;

/// Result of one lookup as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<SearchResultItem>),
    Empty,
    Failed(SearchError),
}

impl SearchOutcome {
    pub fn status(&self) -> SearchStatus {
        match self {
            SearchOutcome::Found(items) => SearchStatus::Found { count: items.len() },
            SearchOutcome::Empty => SearchStatus::Empty,
            SearchOutcome::Failed(err) => SearchStatus::Failed {
                reason: err.to_string(),
            },
        }
    }
}

impl From<Result<Vec<SearchResultItem>, SearchError>> for SearchOutcome {
    fn from(result: Result<Vec<SearchResultItem>, SearchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => SearchOutcome::Empty,
            Ok(items) => SearchOutcome::Found(items),
            Err(err) => SearchOutcome::Failed(err),
        }
    }
}

/// Summary of the last applied lookup, kept for the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchStatus {
    Found { count: usize },
    Empty,
    Failed { reason: String },
}

impl SearchStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchStatus::Failed { .. })
    }
}

use futures::future::BoxFuture;
use serde::Serialize;
use std::error::Error;
use std::fmt;

/// One player returned by a search. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchResultItem {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub thumb: Option<String>,
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Network(String),
    Status(u16),
    Malformed(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {}", msg),
            SearchError::Status(code) => write!(f, "unexpected status: {}", code),
            SearchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl Error for SearchError {}

/// Remote player database the search panel queries.
pub trait PlayerSource: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<SearchResultItem>, SearchError>>;
}

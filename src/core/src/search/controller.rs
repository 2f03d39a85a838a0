use crate::search::{SearchOutcome, SearchResultItem, SearchStatus};
use log::{debug, error};
use std::time::Duration;

pub const MIN_QUERY_CHARS: usize = 3;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What the owner of the controller has to do with its debounce timer
/// after a query edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    Unchanged,
    /// Query too short: results are already cleared, drop any pending timer.
    Cleared,
    /// Restart the timer; look `query` up once it fires.
    Debounce(String),
}

/// Permission to run one lookup. Only the ticket of the latest issued
/// lookup is honoured on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub sequence: u64,
    pub query: String,
}

/// Query, results and loading flag of one search panel.
///
/// The controller is synchronous; timers and remote calls are driven by its
/// owner, which reports back through [`SearchController::begin_lookup`] and
/// [`SearchController::complete_lookup`].
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: String,
    results: Vec<SearchResultItem>,
    loading: bool,
    sequence: u64,
    status: Option<SearchStatus>,
}

impl SearchController {
    pub fn new() -> Self {
        SearchController::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&SearchStatus> {
        self.status.as_ref()
    }

    pub fn is_searchable(query: &str) -> bool {
        query.chars().count() >= MIN_QUERY_CHARS
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> QueryChange {
        let query = query.into();

        if query == self.query {
            return QueryChange::Unchanged;
        }

        self.query = query;

        if !SearchController::is_searchable(&self.query) {
            self.clear_results();
            return QueryChange::Cleared;
        }

        QueryChange::Debounce(self.query.clone())
    }

    /// Empties the query and everything derived from it.
    pub fn clear(&mut self) {
        self.query.clear();
        self.clear_results();
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.status = None;
        self.loading = false;
        // an answer still on its way belongs to a query that no longer exists
        self.sequence += 1;
    }

    /// Called when the debounce timer for `query` fires. Returns `None` when
    /// the query moved on in the meantime.
    pub fn begin_lookup(&mut self, query: &str) -> Option<LookupTicket> {
        if query != self.query || !SearchController::is_searchable(query) {
            return None;
        }

        self.sequence += 1;
        self.loading = true;

        debug!("search #{} issued for '{}'", self.sequence, query);

        Some(LookupTicket {
            sequence: self.sequence,
            query: query.to_string(),
        })
    }

    /// Applies a finished lookup. Answers to anything but the latest issued
    /// lookup are discarded and `false` is returned.
    pub fn complete_lookup(&mut self, ticket: &LookupTicket, outcome: SearchOutcome) -> bool {
        if ticket.sequence != self.sequence {
            debug!(
                "search #{} for '{}' superseded by #{}, discarding",
                ticket.sequence, ticket.query, self.sequence
            );
            return false;
        }

        self.loading = false;
        self.status = Some(outcome.status());

        match outcome {
            SearchOutcome::Found(items) => self.results = items,
            SearchOutcome::Empty => self.results.clear(),
            SearchOutcome::Failed(err) => {
                error!("search for '{}' failed: {}", ticket.query, err);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;

    fn player(name: &str) -> SearchResultItem {
        SearchResultItem {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn short_queries_clear_without_lookup() {
        let mut search = SearchController::new();

        for query in ["", "m", "me"] {
            assert_ne!(search.set_query(query), QueryChange::Debounce(query.to_string()));
            assert!(search.results().is_empty());
            assert!(!search.is_loading());
        }
    }

    #[test]
    fn three_characters_start_the_debounce() {
        let mut search = SearchController::new();

        assert_eq!(search.set_query("mes"), QueryChange::Debounce("mes".to_string()));
        assert_eq!(search.set_query("mes"), QueryChange::Unchanged);
        assert!(!search.is_loading());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!SearchController::is_searchable("Ød"));
        assert!(SearchController::is_searchable("Özi"));
    }

    #[test]
    fn lookup_sets_results_and_loading() {
        let mut search = SearchController::new();
        search.set_query("messi");

        let ticket = search.begin_lookup("messi").unwrap();
        assert!(search.is_loading());

        assert!(search.complete_lookup(&ticket, SearchOutcome::Found(vec![player("Lionel Messi")])));
        assert!(!search.is_loading());
        assert_eq!(search.results().len(), 1);
        assert_eq!(search.status(), Some(&SearchStatus::Found { count: 1 }));
    }

    #[test]
    fn fired_timer_for_an_old_query_issues_nothing() {
        let mut search = SearchController::new();
        search.set_query("mes");
        search.set_query("mess");

        assert_eq!(search.begin_lookup("mes"), None);
        assert!(!search.is_loading());
    }

    #[test]
    fn stale_answer_does_not_overwrite_newer_one() {
        let mut search = SearchController::new();

        search.set_query("ron");
        let slow = search.begin_lookup("ron").unwrap();
        search.set_query("ronaldo");
        let fast = search.begin_lookup("ronaldo").unwrap();

        assert!(search.complete_lookup(&fast, SearchOutcome::Found(vec![player("Cristiano Ronaldo")])));
        assert!(!search.complete_lookup(&slow, SearchOutcome::Found(vec![player("Ronaldinho")])));

        assert_eq!(search.results()[0].name.as_deref(), Some("Cristiano Ronaldo"));
        assert!(!search.is_loading());
    }

    #[test]
    fn answer_after_clearing_is_dropped() {
        let mut search = SearchController::new();
        search.set_query("kane");
        let ticket = search.begin_lookup("kane").unwrap();

        search.clear();

        assert!(!search.complete_lookup(&ticket, SearchOutcome::Found(vec![player("Harry Kane")])));
        assert!(search.results().is_empty());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut search = SearchController::new();
        search.set_query("saka");
        let first = search.begin_lookup("saka").unwrap();
        search.complete_lookup(&first, SearchOutcome::Found(vec![player("Bukayo Saka")]));

        search.set_query("sakam");
        let second = search.begin_lookup("sakam").unwrap();
        search.complete_lookup(&second, SearchOutcome::Failed(SearchError::Network("reset".to_string())));

        assert_eq!(search.results().len(), 1);
        assert!(!search.is_loading());
        assert!(search.status().is_some_and(SearchStatus::is_failure));
    }

    #[test]
    fn empty_outcome_clears_results() {
        let mut search = SearchController::new();
        search.set_query("zzzz");
        let ticket = search.begin_lookup("zzzz").unwrap();

        search.complete_lookup(&ticket, SearchOutcome::Empty);

        assert!(search.results().is_empty());
        assert_eq!(search.status(), Some(&SearchStatus::Empty));
    }
}

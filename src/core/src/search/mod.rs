mod controller;
mod debounce;
mod outcome;
mod source;

pub use controller::{LookupTicket, QueryChange, SearchController, DEFAULT_DEBOUNCE, MIN_QUERY_CHARS};
pub use debounce::DebounceHandle;
pub use outcome::{SearchOutcome, SearchStatus};
pub use source::{PlayerSource, SearchError, SearchResultItem};

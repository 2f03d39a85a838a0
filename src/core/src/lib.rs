pub mod formation;
pub mod roster;
pub mod screen;
pub mod search;

pub use formation::{FormationEntry, FormationType, PitchCoords, FORMATIONS};
pub use roster::{AssignPolicy, CricketRole, Roster, Slot, SlotId, Sport, ROSTER_SIZE};
pub use screen::{
    ScreenAction, ScreenError, ScreenSession, ScreenSnapshot, ScreenState,
    SlotAssignmentCoordinator, Transition,
};
pub use search::{
    DebounceHandle, LookupTicket, PlayerSource, QueryChange, SearchController, SearchError,
    SearchOutcome, SearchResultItem, SearchStatus, DEFAULT_DEBOUNCE, MIN_QUERY_CHARS,
};

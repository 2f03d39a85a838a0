use crate::formation::FormationType;
use crate::roster::{Slot, SlotId, Sport};
use crate::search::{SearchResultItem, SearchStatus};
use serde::Serialize;

/// Owned copy of a screen, taken under the session lock and rendered
/// without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSnapshot {
    pub sport: Sport,
    pub formation: Option<FormationType>,
    pub slots: Vec<Slot>,
    pub active_slot: Option<SlotId>,
    pub input_enabled: bool,
    pub query: String,
    pub results: Vec<SearchResultItem>,
    pub loading: bool,
    pub search_status: Option<SearchStatus>,
    /// A debounce timer is running and a lookup will follow.
    pub search_pending: bool,
}

impl ScreenSnapshot {
    pub fn is_active(&self, id: SlotId) -> bool {
        self.active_slot == Some(id)
    }
}

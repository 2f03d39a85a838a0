use crate::roster::{Roster, SlotId};
use crate::search::SearchResultItem;

/// Tracks the one slot currently being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAssignmentCoordinator {
    active: Option<SlotId>,
}

impl SlotAssignmentCoordinator {
    pub fn new() -> Self {
        SlotAssignmentCoordinator::default()
    }

    pub fn active(&self) -> Option<SlotId> {
        self.active
    }

    pub fn is_active(&self, id: SlotId) -> bool {
        self.active == Some(id)
    }

    pub fn select(&mut self, id: SlotId) {
        self.active = Some(id);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Writes `item` into the active slot and releases the selection.
    /// Returns the id of the slot that changed, if any.
    pub fn assign(&mut self, roster: &mut Roster, item: &SearchResultItem) -> Option<SlotId> {
        let id = self.active.take()?;

        roster.assign(id, item).then_some(id)
    }
}

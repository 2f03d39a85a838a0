mod coordinator;
mod session;
mod snapshot;
mod state;

pub use coordinator::SlotAssignmentCoordinator;
pub use session::ScreenSession;
pub use snapshot::ScreenSnapshot;
pub use state::{ScreenAction, ScreenState, Transition};

use crate::roster::SlotId;
use std::error::Error;
use std::fmt;

/// Reasons a screen refuses an action. A refused action changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    UnknownSlot(SlotId),
    NoSuchResult(usize),
    /// The search input only accepts edits while a slot is selected.
    InputDisabled,
    NotFootball,
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::UnknownSlot(id) => write!(f, "slot {} does not exist", id),
            ScreenError::NoSuchResult(index) => write!(f, "no search result at index {}", index),
            ScreenError::InputDisabled => write!(f, "select a slot before searching"),
            ScreenError::NotFootball => write!(f, "formations only exist on the football screen"),
        }
    }
}

impl Error for ScreenError {}

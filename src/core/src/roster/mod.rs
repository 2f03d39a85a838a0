mod cricket;
mod slot;

pub use cricket::CricketRole;
pub use slot::{AssignPolicy, Slot, SlotId};

use crate::formation::FormationType;
use crate::search::SearchResultItem;
use serde::Serialize;
use std::fmt;

pub const ROSTER_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Cricket,
    Football,
}

impl Sport {
    pub fn all() -> [Sport; 2] {
        [Sport::Cricket, Sport::Football]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Sport::Cricket => "cricket",
            Sport::Football => "football",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket",
            Sport::Football => "Football",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Sport> {
        Sport::all().into_iter().find(|sport| sport.slug() == slug)
    }

    /// Name shown on a slot nobody has been assigned to.
    pub fn empty_slot_name(&self) -> &'static str {
        match self {
            Sport::Cricket => "Empty Slot",
            Sport::Football => "Empty",
        }
    }

    pub fn assign_policy(&self) -> AssignPolicy {
        match self {
            Sport::Cricket => AssignPolicy::Overwrite,
            Sport::Football => AssignPolicy::KeepExisting,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Fixed-size lineup of one screen.
///
/// The slot array never grows, shrinks or reorders, and slot ids are handed
/// out once at construction. Everything else on a slot may change.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    sport: Sport,
    slots: [Slot; ROSTER_SIZE],
}

impl Roster {
    pub fn new(sport: Sport) -> Self {
        match sport {
            Sport::Cricket => Roster::cricket(),
            Sport::Football => Roster::football(FormationType::default()),
        }
    }

    pub fn cricket() -> Self {
        let empty_name = Sport::Cricket.empty_slot_name();

        Roster {
            sport: Sport::Cricket,
            slots: std::array::from_fn(|idx| {
                Slot::empty(
                    idx as SlotId + 1,
                    CricketRole::for_index(idx).short_name(),
                    empty_name,
                )
            }),
        }
    }

    pub fn football(formation: FormationType) -> Self {
        let empty_name = Sport::Football.empty_slot_name();
        let entries = formation.entries();

        Roster {
            sport: Sport::Football,
            slots: std::array::from_fn(|idx| {
                let entry = &entries[idx];
                Slot::empty(entry.id, entry.pos, empty_name).with_coords(entry.coords)
            }),
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn assigned_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.is_unassigned(self.sport))
            .count()
    }

    /// Copies the result into the slot with `id`. Returns `false` when no
    /// such slot exists.
    pub fn assign(&mut self, id: SlotId, item: &SearchResultItem) -> bool {
        let policy = self.sport.assign_policy();

        match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => {
                slot.fill_from(item, policy);
                true
            }
            None => false,
        }
    }

    /// Moves every slot onto the formation entry with the same index.
    /// Assigned players stay where they are in the lineup order.
    pub fn apply_formation(&mut self, formation: FormationType) {
        for (slot, entry) in self.slots.iter_mut().zip(formation.entries().iter()) {
            slot.label = entry.pos.to_string();
            slot.coords = Some(entry.coords);
        }
    }
}

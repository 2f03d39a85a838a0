use crate::formation::FormationType;
use crate::roster::{Roster, SlotId, Sport};
use crate::screen::{ScreenError, ScreenSnapshot, SlotAssignmentCoordinator};
use crate::search::{LookupTicket, QueryChange, SearchController, SearchOutcome};
use log::info;

/// User actions a builder screen reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    SelectSlot(SlotId),
    SetQuery(String),
    /// Pick the search result at this index of the current result list.
    AssignResult(usize),
    SwitchFormation(FormationType),
    Reset,
}

/// Timer work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    None,
    ScheduleSearch(String),
    CancelSearch,
}

/// Everything one builder screen knows: roster, selection and search panel.
#[derive(Debug, Clone)]
pub struct ScreenState {
    roster: Roster,
    formation: Option<FormationType>,
    coordinator: SlotAssignmentCoordinator,
    search: SearchController,
}

impl ScreenState {
    pub fn new(sport: Sport) -> Self {
        let formation = match sport {
            Sport::Cricket => None,
            Sport::Football => Some(FormationType::default()),
        };

        ScreenState {
            roster: Roster::new(sport),
            formation,
            coordinator: SlotAssignmentCoordinator::new(),
            search: SearchController::new(),
        }
    }

    pub fn sport(&self) -> Sport {
        self.roster.sport()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn formation(&self) -> Option<FormationType> {
        self.formation
    }

    pub fn active_slot(&self) -> Option<SlotId> {
        self.coordinator.active()
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn is_input_enabled(&self) -> bool {
        self.coordinator.active().is_some()
    }

    pub fn apply(&mut self, action: ScreenAction) -> Result<Transition, ScreenError> {
        match action {
            ScreenAction::SelectSlot(id) => {
                if !self.roster.contains(id) {
                    return Err(ScreenError::UnknownSlot(id));
                }

                self.coordinator.select(id);
                Ok(Transition::None)
            }
            ScreenAction::SetQuery(query) => {
                if !self.is_input_enabled() {
                    return Err(ScreenError::InputDisabled);
                }

                Ok(match self.search.set_query(query) {
                    QueryChange::Unchanged => Transition::None,
                    QueryChange::Cleared => Transition::CancelSearch,
                    QueryChange::Debounce(query) => Transition::ScheduleSearch(query),
                })
            }
            ScreenAction::AssignResult(index) => {
                let item = self
                    .search
                    .results()
                    .get(index)
                    .cloned()
                    .ok_or(ScreenError::NoSuchResult(index))?;

                if let Some(id) = self.coordinator.assign(&mut self.roster, &item) {
                    info!(
                        "{}: slot {} assigned to {}",
                        self.sport(),
                        id,
                        item.name.as_deref().unwrap_or("<unnamed>")
                    );
                }

                self.search.clear();
                Ok(Transition::CancelSearch)
            }
            ScreenAction::SwitchFormation(formation) => {
                if self.sport() != Sport::Football {
                    return Err(ScreenError::NotFootball);
                }

                self.roster.apply_formation(formation);
                self.formation = Some(formation);

                info!("football: formation switched to {}", formation);
                Ok(Transition::None)
            }
            ScreenAction::Reset => {
                // the search panel survives so its sequence keeps counting
                let search = std::mem::take(&mut self.search);
                *self = ScreenState {
                    search,
                    ..ScreenState::new(self.sport())
                };
                self.search.clear();
                Ok(Transition::CancelSearch)
            }
        }
    }

    pub fn begin_lookup(&mut self, query: &str) -> Option<LookupTicket> {
        self.search.begin_lookup(query)
    }

    pub fn complete_lookup(&mut self, ticket: &LookupTicket, outcome: SearchOutcome) -> bool {
        self.search.complete_lookup(ticket, outcome)
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            sport: self.sport(),
            formation: self.formation,
            slots: self.roster.slots().to_vec(),
            active_slot: self.coordinator.active(),
            input_enabled: self.is_input_enabled(),
            query: self.search.query().to_string(),
            results: self.search.results().to_vec(),
            loading: self.search.is_loading(),
            search_status: self.search.status().cloned(),
            search_pending: false,
        }
    }
}

use crate::formation::PitchCoords;
use crate::roster::Sport;
use crate::search::SearchResultItem;
use serde::Serialize;

pub type SlotId = u32;

/// How a picked search result lands on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignPolicy {
    /// Every field is taken from the result, missing ones included.
    Overwrite,
    /// Fields the result lacks keep the slot's current value.
    KeepExisting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: SlotId,
    /// Role (cricket) or formation position (football), e.g. "WK" or "ST".
    pub label: String,
    pub name: String,
    pub img: Option<String>,
    pub team: Option<String>,
    pub coords: Option<PitchCoords>,
}

impl Slot {
    pub fn empty(id: SlotId, label: &str, name: &str) -> Self {
        Slot {
            id,
            label: label.to_string(),
            name: name.to_string(),
            img: None,
            team: None,
            coords: None,
        }
    }

    pub fn with_coords(mut self, coords: PitchCoords) -> Self {
        self.coords = Some(coords);
        self
    }

    pub fn is_unassigned(&self, sport: Sport) -> bool {
        self.name == sport.empty_slot_name() && self.img.is_none()
    }

    pub(crate) fn fill_from(&mut self, item: &SearchResultItem, policy: AssignPolicy) {
        match policy {
            AssignPolicy::Overwrite => {
                self.name = item.name.clone().unwrap_or_default();
                self.img = item.thumb.clone();
                self.team = item.team.clone();
            }
            AssignPolicy::KeepExisting => {
                if let Some(name) = item.name.as_ref().filter(|name| !name.is_empty()) {
                    self.name = name.clone();
                }
                if let Some(thumb) = &item.thumb {
                    self.img = Some(thumb.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: Option<&str>, thumb: Option<&str>, team: Option<&str>) -> SearchResultItem {
        SearchResultItem {
            external_id: None,
            name: name.map(String::from),
            thumb: thumb.map(String::from),
            team: team.map(String::from),
        }
    }

    #[test]
    fn overwrite_takes_missing_fields_as_missing() {
        let mut slot = Slot::empty(1, "WK", "Empty Slot");
        slot.fill_from(&item(Some("MS Dhoni"), Some("https://img/dhoni.jpg"), Some("India")), AssignPolicy::Overwrite);

        slot.fill_from(&item(Some("Rishabh Pant"), None, None), AssignPolicy::Overwrite);

        assert_eq!(slot.name, "Rishabh Pant");
        assert_eq!(slot.img, None);
        assert_eq!(slot.team, None);
        assert_eq!(slot.label, "WK");
    }

    #[test]
    fn keep_existing_falls_back_to_slot_values() {
        let mut slot = Slot::empty(4, "CM", "Empty").with_coords(PitchCoords::new(30, 42));
        slot.fill_from(&item(Some("Pedri"), Some("https://img/pedri.jpg"), None), AssignPolicy::KeepExisting);

        slot.fill_from(&item(None, None, Some("Barcelona")), AssignPolicy::KeepExisting);

        assert_eq!(slot.name, "Pedri");
        assert_eq!(slot.img.as_deref(), Some("https://img/pedri.jpg"));
        assert_eq!(slot.team, None);
        assert_eq!(slot.coords, Some(PitchCoords::new(30, 42)));
    }

    #[test]
    fn keep_existing_ignores_blank_names() {
        let mut slot = Slot::empty(2, "LW", "Empty");
        slot.fill_from(&item(Some(""), None, None), AssignPolicy::KeepExisting);

        assert_eq!(slot.name, "Empty");
        assert!(slot.is_unassigned(Sport::Football));
    }
}

use crate::roster::{SlotId, ROSTER_SIZE};
use serde::{Serialize, Serializer};
use std::fmt;

/// Football formations offered by the pitch screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormationType {
    #[default]
    T433,
    T442,
    T4231,
    T343,
}

impl FormationType {
    pub fn all() -> Vec<FormationType> {
        vec![
            FormationType::T433,
            FormationType::T442,
            FormationType::T4231,
            FormationType::T343,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormationType::T433 => "4-3-3",
            FormationType::T442 => "4-4-2",
            FormationType::T4231 => "4-2-3-1",
            FormationType::T343 => "3-4-3",
        }
    }

    pub fn from_name(name: &str) -> Option<FormationType> {
        FormationType::all()
            .into_iter()
            .find(|formation| formation.display_name() == name)
    }

    pub fn entries(&self) -> &'static [FormationEntry; ROSTER_SIZE] {
        let (_, entries) = FORMATIONS
            .iter()
            .find(|(formation, _)| formation == self)
            .unwrap_or(&FORMATIONS[0]);

        entries
    }
}

impl fmt::Display for FormationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for FormationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Position on the pitch in percent of its width (`x`) and height (`y`),
/// measured from the top-left corner with the attack pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PitchCoords {
    pub x: u8,
    pub y: u8,
}

impl PitchCoords {
    pub const fn new(x: u8, y: u8) -> Self {
        PitchCoords { x, y }
    }

    pub fn left(&self) -> String {
        format!("{}%", self.x)
    }

    pub fn top(&self) -> String {
        format!("{}%", self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationEntry {
    pub id: SlotId,
    pub pos: &'static str,
    pub coords: PitchCoords,
}

const fn entry(id: SlotId, pos: &'static str, x: u8, y: u8) -> FormationEntry {
    FormationEntry {
        id,
        pos,
        coords: PitchCoords::new(x, y),
    }
}

// Index order is slot order: a slot keeps its index across formations and
// only takes over the label and coordinates found at that index.
pub const FORMATIONS: &[(FormationType, [FormationEntry; ROSTER_SIZE])] = &[
    (
        FormationType::T433,
        [
            entry(1, "ST", 50, 12),
            entry(2, "LW", 20, 18),
            entry(3, "RW", 80, 18),
            entry(4, "CM", 30, 42),
            entry(5, "CDM", 50, 55),
            entry(6, "CM", 70, 42),
            entry(7, "LB", 15, 72),
            entry(8, "CB", 40, 78),
            entry(9, "CB", 60, 78),
            entry(10, "RB", 85, 72),
            entry(11, "GK", 50, 92),
        ],
    ),
    (
        FormationType::T442,
        [
            entry(1, "ST", 42, 12),
            entry(2, "ST", 58, 12),
            entry(3, "LM", 15, 42),
            entry(4, "CM", 40, 45),
            entry(5, "CM", 60, 45),
            entry(6, "RM", 85, 42),
            entry(7, "LB", 15, 72),
            entry(8, "CB", 40, 78),
            entry(9, "CB", 60, 78),
            entry(10, "RB", 85, 72),
            entry(11, "GK", 50, 92),
        ],
    ),
    (
        FormationType::T4231,
        [
            entry(1, "ST", 50, 10),
            entry(2, "LAM", 20, 25),
            entry(3, "CAM", 50, 28),
            entry(4, "RAM", 80, 25),
            entry(5, "CDM", 38, 55),
            entry(6, "CDM", 62, 55),
            entry(7, "LB", 15, 72),
            entry(8, "CB", 40, 78),
            entry(9, "CB", 60, 78),
            entry(10, "RB", 85, 72),
            entry(11, "GK", 50, 92),
        ],
    ),
    (
        FormationType::T343,
        [
            entry(1, "ST", 50, 12),
            entry(2, "LW", 20, 18),
            entry(3, "RW", 80, 18),
            entry(4, "LM", 15, 45),
            entry(5, "CM", 40, 48),
            entry(6, "CM", 60, 48),
            entry(7, "RM", 85, 45),
            entry(8, "CB", 28, 78),
            entry(9, "CB", 50, 82),
            entry(10, "CB", 72, 78),
            entry(11, "GK", 50, 92),
        ],
    ),
];

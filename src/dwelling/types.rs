use serde::{Deserialize, Serialize};

pub type ResidentCount = u32;
pub type FloorCount = u32;

pub const SQUARE_CABIN_CAPACITY: ResidentCount = 6;
pub const ROUND_HUT_CAPACITY: ResidentCount = 4;
pub const RESIDENTS_PER_TOWER_FLOOR: ResidentCount = 4;
pub const DEFAULT_TOWER_FLOORS: FloorCount = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionResult {
    Admitted,
    AtCapacity,
}

impl AdmissionResult {
    pub fn is_admitted(self) -> bool {
        matches!(self, AdmissionResult::Admitted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwellingKind {
    SquareCabin,
    RoundHut,
    RoundTower,
}

impl DwellingKind {
    pub fn building_material(self) -> &'static str {
        match self {
            DwellingKind::SquareCabin => "Wood",
            DwellingKind::RoundHut => "Straw",
            DwellingKind::RoundTower => "Stone",
        }
    }

    /// Capacity fixed by the variant itself; towers scale with their floors.
    pub fn fixed_capacity(self) -> Option<ResidentCount> {
        match self {
            DwellingKind::SquareCabin => Some(SQUARE_CABIN_CAPACITY),
            DwellingKind::RoundHut => Some(ROUND_HUT_CAPACITY),
            DwellingKind::RoundTower => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DwellingKind::SquareCabin => "Square Cabin",
            DwellingKind::RoundHut => "Round Hut",
            DwellingKind::RoundTower => "Round Tower",
        }
    }
}

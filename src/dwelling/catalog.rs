use serde::{Deserialize, Serialize};

use crate::dwelling::{
    contract::Dwelling,
    error::DwellingError,
    round_hut::RoundHut,
    round_tower::RoundTower,
    square_cabin::SquareCabin,
    types::{DEFAULT_TOWER_FLOORS, DwellingKind, FloorCount, ResidentCount},
};

fn default_tower_floors() -> FloorCount {
    DEFAULT_TOWER_FLOORS
}

/// Serializable description of a dwelling, validated on [`DwellingSpec::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DwellingSpec {
    SquareCabin {
        residents: ResidentCount,
        length: f64,
    },
    RoundHut {
        residents: ResidentCount,
        radius: f64,
    },
    RoundTower {
        residents: ResidentCount,
        radius: f64,
        #[serde(default = "default_tower_floors")]
        floors: FloorCount,
    },
}

impl DwellingSpec {
    pub fn kind(&self) -> DwellingKind {
        match self {
            DwellingSpec::SquareCabin { .. } => DwellingKind::SquareCabin,
            DwellingSpec::RoundHut { .. } => DwellingKind::RoundHut,
            DwellingSpec::RoundTower { .. } => DwellingKind::RoundTower,
        }
    }

    pub fn build(&self) -> Result<Box<dyn Dwelling>, DwellingError> {
        let dwelling: Box<dyn Dwelling> = match *self {
            DwellingSpec::SquareCabin { residents, length } => {
                Box::new(SquareCabin::new(residents, length)?)
            }
            DwellingSpec::RoundHut { residents, radius } => {
                Box::new(RoundHut::new(residents, radius)?)
            }
            DwellingSpec::RoundTower {
                residents,
                radius,
                floors,
            } => Box::new(RoundTower::with_floors(residents, radius, floors)?),
        };
        Ok(dwelling)
    }
}

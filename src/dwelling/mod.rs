pub mod catalog;
pub mod contract;
pub mod error;
pub mod occupancy;
pub mod round_hut;
pub mod round_tower;
pub mod square_cabin;
pub mod types;

pub use catalog::DwellingSpec;
pub use contract::Dwelling;
pub use error::{DwellingError, DwellingErrorKind};
pub use occupancy::Occupancy;
pub use round_hut::{CircularFootprint, RoundHut};
pub use round_tower::RoundTower;
pub use square_cabin::SquareCabin;
pub use types::{
    AdmissionResult, DEFAULT_TOWER_FLOORS, DwellingKind, FloorCount, ROUND_HUT_CAPACITY,
    RESIDENTS_PER_TOWER_FLOOR, ResidentCount, SQUARE_CABIN_CAPACITY,
};

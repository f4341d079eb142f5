use crate::dwelling::{
    contract::Dwelling,
    error::{DwellingError, invalid_argument},
    occupancy::Occupancy,
    round_hut::CircularFootprint,
    types::{
        AdmissionResult, DEFAULT_TOWER_FLOORS, DwellingKind, FloorCount,
        RESIDENTS_PER_TOWER_FLOOR, ResidentCount,
    },
};

/// A stack of full-size round floors. Each floor repeats the hut footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTower {
    occupancy: Occupancy,
    footprint: CircularFootprint,
    floors: FloorCount,
}

impl RoundTower {
    pub fn new(residents: ResidentCount, radius: f64) -> Result<Self, DwellingError> {
        Self::with_floors(residents, radius, DEFAULT_TOWER_FLOORS)
    }

    pub fn with_floors(
        residents: ResidentCount,
        radius: f64,
        floors: FloorCount,
    ) -> Result<Self, DwellingError> {
        if floors == 0 {
            return Err(invalid_argument("round tower needs at least one floor"));
        }
        let capacity = RESIDENTS_PER_TOWER_FLOOR
            .checked_mul(floors)
            .ok_or_else(|| invalid_argument(format!("{floors} floors overflow tower capacity")))?;
        let footprint = CircularFootprint::new(radius)?;

        Ok(Self {
            occupancy: Occupancy::new(residents, capacity)?,
            footprint,
            floors,
        })
    }

    pub fn radius(&self) -> f64 {
        self.footprint.radius()
    }

    pub fn floors(&self) -> FloorCount {
        self.floors
    }

    pub fn footprint(&self) -> &CircularFootprint {
        &self.footprint
    }

    pub fn max_inscribed_square_carpet_size(&self) -> f64 {
        self.footprint.max_inscribed_square_side()
    }
}

impl Dwelling for RoundTower {
    fn kind(&self) -> DwellingKind {
        DwellingKind::RoundTower
    }

    fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    fn admit_resident(&mut self) -> AdmissionResult {
        self.occupancy.admit()
    }

    fn floor_area(&self) -> f64 {
        self.footprint.area() * f64::from(self.floors)
    }

    fn max_inscribed_square_carpet_size(&self) -> Option<f64> {
        Some(RoundTower::max_inscribed_square_carpet_size(self))
    }
}

use crate::dwelling::{
    contract::Dwelling,
    error::{DwellingError, ensure_positive_dimension},
    occupancy::Occupancy,
    types::{AdmissionResult, DwellingKind, ResidentCount, SQUARE_CABIN_CAPACITY},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SquareCabin {
    occupancy: Occupancy,
    length: f64,
}

impl SquareCabin {
    pub fn new(residents: ResidentCount, length: f64) -> Result<Self, DwellingError> {
        let length = ensure_positive_dimension("square cabin length", length)?;
        Ok(Self {
            occupancy: Occupancy::new(residents, SQUARE_CABIN_CAPACITY)?,
            length,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Dwelling for SquareCabin {
    fn kind(&self) -> DwellingKind {
        DwellingKind::SquareCabin
    }

    fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    fn admit_resident(&mut self) -> AdmissionResult {
        self.occupancy.admit()
    }

    fn floor_area(&self) -> f64 {
        self.length * self.length
    }
}

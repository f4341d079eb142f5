use std::f64::consts::PI;

use crate::dwelling::{
    contract::Dwelling,
    error::{DwellingError, ensure_positive_dimension},
    occupancy::Occupancy,
    types::{AdmissionResult, DwellingKind, ROUND_HUT_CAPACITY, ResidentCount},
};

/// Circular floor plate shared by the round dwellings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularFootprint {
    radius: f64,
}

impl CircularFootprint {
    pub fn new(radius: f64) -> Result<Self, DwellingError> {
        Ok(Self {
            radius: ensure_positive_dimension("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// The inscribed square's diagonal equals the diameter.
    pub fn max_inscribed_square_side(&self) -> f64 {
        let diameter = 2.0 * self.radius;
        (diameter * diameter / 2.0).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundHut {
    occupancy: Occupancy,
    footprint: CircularFootprint,
}

impl RoundHut {
    pub fn new(residents: ResidentCount, radius: f64) -> Result<Self, DwellingError> {
        Ok(Self {
            occupancy: Occupancy::new(residents, ROUND_HUT_CAPACITY)?,
            footprint: CircularFootprint::new(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.footprint.radius()
    }

    pub fn footprint(&self) -> &CircularFootprint {
        &self.footprint
    }

    pub fn max_inscribed_square_carpet_size(&self) -> f64 {
        self.footprint.max_inscribed_square_side()
    }
}

impl Dwelling for RoundHut {
    fn kind(&self) -> DwellingKind {
        DwellingKind::RoundHut
    }

    fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    fn admit_resident(&mut self) -> AdmissionResult {
        self.occupancy.admit()
    }

    fn floor_area(&self) -> f64 {
        self.footprint.area()
    }

    fn max_inscribed_square_carpet_size(&self) -> Option<f64> {
        Some(RoundHut::max_inscribed_square_carpet_size(self))
    }
}

use crate::dwelling::{
    error::{DwellingError, invalid_argument},
    types::{AdmissionResult, ResidentCount},
};

/// Resident bookkeeping shared by every dwelling variant.
///
/// `residents` only ever moves through [`Occupancy::admit`], which keeps
/// `residents <= capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    residents: ResidentCount,
    capacity: ResidentCount,
}

impl Occupancy {
    pub fn new(residents: ResidentCount, capacity: ResidentCount) -> Result<Self, DwellingError> {
        if residents > capacity {
            return Err(invalid_argument(format!(
                "initial residents ({residents}) exceed capacity ({capacity})"
            )));
        }
        Ok(Self {
            residents,
            capacity,
        })
    }

    pub fn residents(&self) -> ResidentCount {
        self.residents
    }

    pub fn capacity(&self) -> ResidentCount {
        self.capacity
    }

    pub fn has_room(&self) -> bool {
        self.residents < self.capacity
    }

    pub fn admit(&mut self) -> AdmissionResult {
        if !self.has_room() {
            return AdmissionResult::AtCapacity;
        }
        self.residents += 1;
        AdmissionResult::Admitted
    }
}

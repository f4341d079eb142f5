use crate::dwelling::{
    occupancy::Occupancy,
    types::{AdmissionResult, DwellingKind, ResidentCount},
};

/// Shared capability set of every dwelling.
///
/// Occupancy is only readable through this trait; [`Dwelling::admit_resident`]
/// is the single way to change it.
///
/// ```compile_fail
/// use calcapp::dwelling::{Dwelling, Occupancy, SquareCabin};
///
/// let mut cabin = SquareCabin::new(6, 50.0).unwrap();
/// *cabin.occupancy_mut() = Occupancy::new(0, 1000).unwrap();
/// ```
///
/// ```compile_fail
/// use calcapp::dwelling::{Dwelling, Occupancy, SquareCabin};
///
/// let cabin = SquareCabin::new(6, 50.0).unwrap();
/// let occupancy: &mut Occupancy = cabin.occupancy();
/// ```
pub trait Dwelling: std::fmt::Debug {
    fn kind(&self) -> DwellingKind;

    fn occupancy(&self) -> &Occupancy;

    fn admit_resident(&mut self) -> AdmissionResult;

    fn floor_area(&self) -> f64;

    /// Side of the largest square carpet that fits one floor, for circular
    /// footprints only.
    fn max_inscribed_square_carpet_size(&self) -> Option<f64> {
        None
    }

    fn building_material(&self) -> &'static str {
        self.kind().building_material()
    }

    fn capacity(&self) -> ResidentCount {
        self.occupancy().capacity()
    }

    fn residents(&self) -> ResidentCount {
        self.occupancy().residents()
    }

    fn has_room(&self) -> bool {
        self.occupancy().has_room()
    }
}

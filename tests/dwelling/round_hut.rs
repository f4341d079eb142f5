use std::f64::consts::PI;

use calcapp::dwelling::{
    AdmissionResult, Dwelling, DwellingErrorKind, DwellingKind, ROUND_HUT_CAPACITY, RoundHut,
};

use super::assert_close;

#[test]
fn given_hut_with_room_when_admitting_twice_then_hut_fills_up() {
    let mut hut = RoundHut::new(3, 10.0).expect("hut should build");
    assert!(hut.has_room());

    assert_eq!(hut.admit_resident(), AdmissionResult::Admitted);
    assert!(!hut.has_room());
    assert_eq!(hut.admit_resident(), AdmissionResult::AtCapacity);

    assert_eq!(hut.residents(), ROUND_HUT_CAPACITY);
    assert!(!hut.has_room());
}

#[test]
fn given_hut_when_inspected_then_reports_straw_and_circular_geometry() {
    let hut = RoundHut::new(3, 10.0).expect("hut should build");

    assert_eq!(hut.kind(), DwellingKind::RoundHut);
    assert_eq!(hut.building_material(), "Straw");
    assert_eq!(hut.capacity(), 4);
    assert_close(hut.floor_area(), 314.159_265, 1e-5);
    assert_eq!(format!("{:.2}", hut.floor_area()), "314.16");
    assert_eq!(format!("{:.2}", hut.max_inscribed_square_carpet_size()), "14.14");
}

#[test]
fn given_radius_when_computing_carpet_then_matches_diagonal_relation() {
    for radius in [0.5, 1.0, 10.0, 42.25] {
        let hut = RoundHut::new(0, radius).expect("hut should build");
        let diameter = 2.0 * radius;
        assert_close(
            hut.max_inscribed_square_carpet_size(),
            (diameter * diameter / 2.0).sqrt(),
            1e-9,
        );
    }
}

#[test]
fn given_hut_as_dwelling_then_carpet_size_is_exposed() {
    let hut = RoundHut::new(0, 10.0).expect("hut should build");
    let dwelling: &dyn Dwelling = &hut;

    let carpet = dwelling
        .max_inscribed_square_carpet_size()
        .expect("round hut should expose a carpet size");
    assert_close(carpet, 200.0_f64.sqrt(), 1e-9);
}

#[test]
fn given_doubled_radius_then_floor_area_quadruples() {
    let small = RoundHut::new(0, 2.0).expect("hut should build");
    let large = RoundHut::new(0, 4.0).expect("hut should build");

    assert_close(large.floor_area(), small.floor_area() * 4.0, 1e-9);
    assert_close(small.floor_area(), PI * 4.0, 1e-9);
}

#[test]
fn given_non_positive_radius_when_constructing_then_invalid_argument() {
    let err = RoundHut::new(0, 0.0).expect_err("zero radius must be rejected");
    assert_eq!(err.kind, DwellingErrorKind::InvalidArgument);
    assert!(err.message.contains("radius"));
}

use std::f64::consts::PI;

use calcapp::dwelling::{
    AdmissionResult, DEFAULT_TOWER_FLOORS, Dwelling, DwellingErrorKind, DwellingKind, RoundHut,
    RoundTower,
};

use super::assert_close;

#[test]
fn given_four_floor_tower_when_inspected_then_capacity_and_area_scale_with_floors() {
    let tower = RoundTower::with_floors(4, 15.5, 4).expect("tower should build");

    assert_eq!(tower.kind(), DwellingKind::RoundTower);
    assert_eq!(tower.building_material(), "Stone");
    assert_eq!(tower.capacity(), 16);
    assert_close(tower.floor_area(), PI * 15.5 * 15.5 * 4.0, 1e-9);
    assert_eq!(format!("{:.2}", tower.floor_area()), "3019.07");
}

#[test]
fn given_default_tower_then_two_floors_and_eight_residents_capacity() {
    let tower = RoundTower::new(4, 15.5).expect("tower should build");

    assert_eq!(tower.floors(), DEFAULT_TOWER_FLOORS);
    assert_eq!(tower.capacity(), 8);
    assert!(tower.has_room());
}

#[test]
fn given_same_radius_then_tower_area_is_floors_times_hut_area() {
    for floors in 1..=5 {
        let tower = RoundTower::with_floors(0, 6.0, floors).expect("tower should build");
        let hut = RoundHut::new(0, 6.0).expect("hut should build");

        assert_close(tower.floor_area(), hut.floor_area() * f64::from(floors), 1e-9);
        assert_eq!(tower.capacity(), 4 * floors);
    }
}

#[test]
fn given_tower_then_carpet_size_covers_a_single_floor() {
    let tower = RoundTower::with_floors(0, 10.0, 3).expect("tower should build");
    let hut = RoundHut::new(0, 10.0).expect("hut should build");

    assert_close(
        tower.max_inscribed_square_carpet_size(),
        hut.max_inscribed_square_carpet_size(),
        1e-12,
    );
    let dwelling: &dyn Dwelling = &tower;
    assert_eq!(
        dwelling.max_inscribed_square_carpet_size(),
        Some(hut.max_inscribed_square_carpet_size())
    );
}

#[test]
fn given_tower_when_filled_then_admission_stops_at_capacity() {
    let mut tower = RoundTower::with_floors(6, 3.0, 2).expect("tower should build");

    assert_eq!(tower.admit_resident(), AdmissionResult::Admitted);
    assert_eq!(tower.admit_resident(), AdmissionResult::Admitted);
    assert_eq!(tower.admit_resident(), AdmissionResult::AtCapacity);
    assert_eq!(tower.residents(), 8);
}

#[test]
fn given_zero_floors_when_constructing_then_invalid_argument() {
    let err = RoundTower::with_floors(0, 5.0, 0).expect_err("zero floors must be rejected");
    assert_eq!(err.kind, DwellingErrorKind::InvalidArgument);
}

#[test]
fn given_floor_count_overflowing_capacity_when_constructing_then_invalid_argument() {
    let err = RoundTower::with_floors(0, 5.0, u32::MAX).expect_err("overflow must be rejected");
    assert_eq!(err.kind, DwellingErrorKind::InvalidArgument);
}

#[test]
fn given_residents_beyond_tower_capacity_when_constructing_then_invalid_argument() {
    let err = RoundTower::new(9, 5.0).expect_err("overfull tower must be rejected");
    assert_eq!(err.kind, DwellingErrorKind::InvalidArgument);
}

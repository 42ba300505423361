// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

mod helpers;

use helpers::{ANA, VOLTA, seeded_registry};
use rolapet::domain::VehicleKind;
use rolapet::services::fleet;
use rolapet::{Config, Error};

#[test]
fn create_vehicle_generates_configured_id_length() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = fleet::create_vehicle(&mut registry, &config, "Xiaomi", "M365", 45, "scooter").unwrap();
    assert_eq!(id.len(), config.id_len);

    let vehicle = registry.vehicle_by_id(&id).unwrap();
    assert_eq!(vehicle.kind, VehicleKind::Scooter);
    assert_eq!(vehicle.range_km, 45);
}

#[test]
fn kind_labels_parse_including_short_forms() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = fleet::create_vehicle(&mut registry, &config, "NIU", "NQi GT", 80, "moto").unwrap();
    assert_eq!(
        registry.vehicle_by_id(&id).unwrap().kind,
        VehicleKind::ElectricMotorcycle
    );

    let id =
        fleet::create_vehicle(&mut registry, &config, "NIU", "NQi GT", 80, " Scooter ").unwrap();
    assert_eq!(registry.vehicle_by_id(&id).unwrap().kind, VehicleKind::Scooter);
}

#[test]
fn unknown_kind_rejected() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let err =
        fleet::create_vehicle(&mut registry, &config, "Tesla", "Model 3", 500, "car").unwrap_err();
    assert!(matches!(err, Error::UnknownKind { what: "vehicle", .. }));
    assert!(registry.vehicles().is_empty());
}

#[test]
fn zero_range_rejected() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let err =
        fleet::create_vehicle(&mut registry, &config, "Xiaomi", "M365", 0, "scooter").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: "range_km",
            ..
        }
    ));
}

#[test]
fn register_vehicle_attaches_to_owner() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id =
        fleet::register_vehicle(&mut registry, &config, ANA, "Xiaomi", "M365", 45, "scooter")
            .unwrap();

    let owned = fleet::vehicles_of(&registry, ANA).unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, id);
    // Also present in the global registry.
    assert!(registry.vehicle_by_id(&id).is_some());
}

#[test]
fn register_vehicle_for_unknown_owner_leaves_no_orphan() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let err = fleet::register_vehicle(
        &mut registry,
        &config,
        "0000000",
        "Xiaomi",
        "M365",
        45,
        "scooter",
    )
    .unwrap_err();
    assert!(matches!(err, Error::PersonNotFound { .. }));
    assert!(registry.vehicles().is_empty());
}

#[test]
fn attach_is_user_only_and_rejects_double_attach() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = fleet::create_vehicle(&mut registry, &config, "Xiaomi", "M365", 45, "scooter").unwrap();

    let err = fleet::attach_vehicle(&mut registry, VOLTA, &id).unwrap_err();
    assert!(matches!(err, Error::RoleMismatch { .. }));

    fleet::attach_vehicle(&mut registry, ANA, &id).unwrap();
    let err = fleet::attach_vehicle(&mut registry, ANA, &id).unwrap_err();
    assert!(matches!(err, Error::AlreadyAttached { .. }));
}

#[test]
fn attach_unknown_vehicle_errors() {
    let mut registry = seeded_registry();
    let err = fleet::attach_vehicle(&mut registry, ANA, "missing1").unwrap_err();
    assert!(matches!(err, Error::VehicleNotFound { .. }));
}

#[test]
fn detach_removes_from_owner_and_registry() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id =
        fleet::register_vehicle(&mut registry, &config, ANA, "Xiaomi", "M365", 45, "scooter")
            .unwrap();
    fleet::detach_vehicle(&mut registry, ANA, &id).unwrap();

    assert!(fleet::vehicles_of(&registry, ANA).unwrap().is_empty());
    assert!(registry.vehicle_by_id(&id).is_none());
}

#[test]
fn detach_unowned_vehicle_errors() {
    let mut registry = seeded_registry();
    let config = Config::default();

    // Vehicle exists globally but was never attached to ANA.
    let id = fleet::create_vehicle(&mut registry, &config, "Xiaomi", "M365", 45, "scooter").unwrap();
    let err = fleet::detach_vehicle(&mut registry, ANA, &id).unwrap_err();
    assert!(matches!(err, Error::NotAttached { .. }));
    assert!(registry.vehicle_by_id(&id).is_some());
}

#[test]
fn vehicles_of_requires_a_user() {
    let registry = seeded_registry();
    let err = fleet::vehicles_of(&registry, VOLTA).unwrap_err();
    assert!(matches!(err, Error::RoleMismatch { .. }));
}

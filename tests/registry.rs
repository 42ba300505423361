// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use chrono::NaiveDate;
use rolapet::Registry;
use rolapet::domain::{Item, ItemKind, Person, Post, PostKind, Vehicle, VehicleKind};

fn scooter(id: &str) -> Vehicle {
    Vehicle {
        id: id.into(),
        brand: "Xiaomi".into(),
        model: "M365".into(),
        range_km: 45,
        kind: VehicleKind::Scooter,
    }
}

// ─── People ─────────────────────────────────────────────────────────────────

#[test]
fn add_person_then_find_by_cedula() {
    let mut registry = Registry::new();
    assert!(registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "ana@example.com"
    )));

    let found = registry.person_by_cedula("1001001").unwrap();
    assert_eq!(found.name, "Ana");
    assert!(registry.person_by_cedula("9999999").is_none());
}

#[test]
fn duplicate_cedula_insert_is_a_noop() {
    let mut registry = Registry::new();
    registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "ana@example.com",
    ));

    // Same cedula, different everything else: still the same person.
    let inserted = registry.add_person(Person::new_admin(
        "1001001",
        "Impostor",
        "3009998877",
        "other",
        "other@example.com",
    ));
    assert!(!inserted);
    assert_eq!(registry.people().len(), 1);
    assert_eq!(registry.person_by_cedula("1001001").unwrap().name, "Ana");
}

#[test]
fn user_by_email_ignores_other_roles() {
    let mut registry = Registry::new();
    registry.add_person(Person::new_provider(
        "9009002",
        "Volta",
        "3000001122",
        "pw",
        "shared@example.com",
    ));
    assert!(registry.user_by_email("shared@example.com").is_none());

    registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "shared@example.com",
    ));
    let found = registry.user_by_email("shared@example.com").unwrap();
    assert_eq!(found.cedula, "1001001");
}

#[test]
fn remove_person_reports_whether_removed() {
    let mut registry = Registry::new();
    registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "ana@example.com",
    ));

    assert!(registry.remove_person("1001001"));
    assert!(!registry.remove_person("1001001"));
    assert!(registry.people().is_empty());
}

#[test]
fn role_filtered_views() {
    let mut registry = Registry::new();
    registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "ana@example.com",
    ));
    registry.add_person(Person::new_admin(
        "9009001",
        "Root",
        "3007778899",
        "pw",
        "root@example.com",
    ));
    registry.add_person(Person::new_provider(
        "9009002",
        "Volta",
        "3000001122",
        "pw",
        "volta@example.com",
    ));

    assert_eq!(registry.users().len(), 1);
    assert_eq!(registry.admins().len(), 1);
    assert_eq!(registry.providers().len(), 1);
    assert_eq!(registry.people().len(), 3);
}

// ─── Vehicles / Items / Posts ───────────────────────────────────────────────

#[test]
fn duplicate_vehicle_id_insert_is_a_noop() {
    let mut registry = Registry::new();
    assert!(registry.add_vehicle(scooter("veh1")));
    assert!(!registry.add_vehicle(scooter("veh1")));
    assert_eq!(registry.vehicles().len(), 1);
}

#[test]
fn vehicle_roundtrip() {
    let mut registry = Registry::new();
    registry.add_vehicle(scooter("veh1"));

    assert_eq!(registry.vehicle_by_id("veh1").unwrap().brand, "Xiaomi");
    assert!(registry.remove_vehicle("veh1"));
    assert!(registry.vehicle_by_id("veh1").is_none());
    assert!(!registry.remove_vehicle("veh1"));
}

#[test]
fn item_and_post_roundtrip() {
    let mut registry = Registry::new();
    assert!(registry.add_item(Item {
        id: "item1".into(),
        name: "Helmet".into(),
        description: "Certified helmet".into(),
        kind: ItemKind::Product,
    }));
    assert!(!registry.add_item(Item {
        id: "item1".into(),
        name: "Other".into(),
        description: "Duplicate id".into(),
        kind: ItemKind::Service,
    }));
    assert_eq!(registry.item_by_id("item1").unwrap().name, "Helmet");

    assert!(registry.add_post(Post {
        id: "post1".into(),
        title: "Sunday ride".into(),
        description: "Leaving at 9am".into(),
        created_on: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        kind: PostKind::Event,
    }));
    assert_eq!(registry.post_by_id("post1").unwrap().kind, PostKind::Event);
    assert!(registry.remove_post("post1"));
    assert!(registry.posts().is_empty());
}

// ─── Stats ──────────────────────────────────────────────────────────────────

#[test]
fn stats_match_list_lengths() {
    let mut registry = Registry::new();
    registry.add_person(Person::new_user(
        "1001001",
        "Ana",
        "3001112233",
        "pw",
        "ana@example.com",
    ));
    registry.add_person(Person::new_user(
        "1001002",
        "Luis",
        "3004445566",
        "pw",
        "luis@example.com",
    ));
    registry.add_person(Person::new_provider(
        "9009002",
        "Volta",
        "3000001122",
        "pw",
        "volta@example.com",
    ));
    registry.add_vehicle(scooter("veh1"));

    let stats = registry.stats();
    assert_eq!(stats.people, 3);
    assert_eq!(stats.users, 2);
    assert_eq!(stats.admins, 0);
    assert_eq!(stats.providers, 1);
    assert_eq!(stats.vehicles, 1);
    assert_eq!(stats.items, 0);
    assert_eq!(stats.posts, 0);
}

#[test]
fn stats_report_is_human_readable() {
    let registry = Registry::new();
    let report = registry.stats().to_string();
    assert!(report.contains("People:    0"));
    assert!(report.contains("Posts:     0"));
}

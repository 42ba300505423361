// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

mod helpers;

use chrono::Local;
use helpers::{ANA, VOLTA, seeded_registry};
use rolapet::domain::{ItemKind, PostKind};
use rolapet::services::catalog;
use rolapet::{Config, Error};

// ─── Items ──────────────────────────────────────────────────────────────────

#[test]
fn offer_item_lands_in_provider_catalog() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = catalog::offer_item(
        &mut registry,
        &config,
        VOLTA,
        "Brake tune-up",
        "Full inspection",
        "service",
    )
    .unwrap();

    let items = catalog::items_of(&registry, VOLTA).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].kind, ItemKind::Service);
}

#[test]
fn item_kind_parses_or_rejects() {
    let mut registry = seeded_registry();
    let config = Config::default();

    catalog::create_item(&mut registry, &config, "Helmet", "Certified", "Product").unwrap();
    let err =
        catalog::create_item(&mut registry, &config, "Helmet", "Certified", "gadget").unwrap_err();
    assert!(matches!(err, Error::UnknownKind { what: "item", .. }));
}

#[test]
fn attach_item_requires_provider() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = catalog::create_item(&mut registry, &config, "Helmet", "Certified", "product").unwrap();

    let err = catalog::attach_item(&mut registry, ANA, &id).unwrap_err();
    assert!(matches!(err, Error::RoleMismatch { .. }));

    catalog::attach_item(&mut registry, VOLTA, &id).unwrap();
    let err = catalog::attach_item(&mut registry, VOLTA, &id).unwrap_err();
    assert!(matches!(err, Error::AlreadyAttached { .. }));
}

#[test]
fn attach_unknown_item_errors() {
    let mut registry = seeded_registry();
    let err = catalog::attach_item(&mut registry, VOLTA, "missing1").unwrap_err();
    assert!(matches!(err, Error::ItemNotFound { .. }));
}

#[test]
fn blank_item_fields_rejected() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let err = catalog::create_item(&mut registry, &config, "  ", "Certified", "product").unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    assert!(registry.items().is_empty());
}

// ─── Posts ──────────────────────────────────────────────────────────────────

#[test]
fn publish_post_stamps_creation_date() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = catalog::publish_post(
        &mut registry,
        &config,
        VOLTA,
        "Sunday ride",
        "Leaving at 9am",
        "event",
    )
    .unwrap();

    let post = registry.post_by_id(&id).unwrap();
    assert_eq!(post.kind, PostKind::Event);
    assert_eq!(post.created_on, Local::now().date_naive());

    let posts = catalog::posts_of(&registry, VOLTA).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, id);
}

#[test]
fn post_kind_accepts_promo_short_form() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let id = catalog::create_post(&mut registry, &config, "Sale", "10% off", "promo").unwrap();
    assert_eq!(registry.post_by_id(&id).unwrap().kind, PostKind::Promotion);

    let err = catalog::create_post(&mut registry, &config, "Sale", "10% off", "news").unwrap_err();
    assert!(matches!(err, Error::UnknownKind { what: "post", .. }));
}

#[test]
fn posts_of_requires_provider() {
    let registry = seeded_registry();

    let err = catalog::posts_of(&registry, ANA).unwrap_err();
    assert!(matches!(err, Error::RoleMismatch { .. }));

    let err = catalog::posts_of(&registry, "0000000").unwrap_err();
    assert!(matches!(err, Error::PersonNotFound { .. }));
}

#[test]
fn publish_for_non_provider_leaves_no_orphan() {
    let mut registry = seeded_registry();
    let config = Config::default();

    let err = catalog::publish_post(
        &mut registry,
        &config,
        ANA,
        "Sunday ride",
        "Leaving at 9am",
        "event",
    )
    .unwrap_err();
    assert!(matches!(err, Error::RoleMismatch { .. }));
    assert!(registry.posts().is_empty());
}

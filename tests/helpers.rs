// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use rolapet::services::accounts;
use rolapet::{Config, Registry};

/// Registry with two users, one admin, and one provider registered
/// through the real service layer.
#[allow(dead_code)]
pub fn seeded_registry() -> Registry {
    let mut registry = Registry::new();
    let config = Config::default();

    accounts::register_user(
        &mut registry,
        &config,
        "1001001",
        "Ana Rojas",
        "3001112233",
        "secret1",
        "ana@example.com",
    )
    .unwrap();
    accounts::register_user(
        &mut registry,
        &config,
        "1001002",
        "Luis Pardo",
        "3004445566",
        "secret2",
        "luis@example.com",
    )
    .unwrap();
    accounts::register_admin(
        &mut registry,
        &config,
        "9009001",
        "Root Admin",
        "3007778899",
        "adminpw",
        "root@example.com",
    )
    .unwrap();
    accounts::register_provider(
        &mut registry,
        &config,
        "9009002",
        "Volta Store",
        "3000001122",
        "voltapw",
        "volta@example.com",
    )
    .unwrap();

    registry
}

#[allow(dead_code)]
pub const ANA: &str = "1001001";
#[allow(dead_code)]
pub const LUIS: &str = "1001002";
#[allow(dead_code)]
pub const ADMIN: &str = "9009001";
#[allow(dead_code)]
pub const VOLTA: &str = "9009002";

// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::config::Config;
use crate::domain::{Role, Vehicle, VehicleKind};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::services::{ids, validate};

const VEHICLE_KINDS: &[&str] = &["scooter", "electric motorcycle"];

/// Create a vehicle in the registry without attaching it to anyone.
/// Returns the generated id.
pub fn create_vehicle(
    registry: &mut Registry,
    config: &Config,
    brand: &str,
    model: &str,
    range_km: u32,
    kind: &str,
) -> Result<String> {
    validate::non_blank("brand", brand)?;
    validate::non_blank("model", model)?;
    if range_km == 0 {
        return Err(Error::InvalidField {
            field: "range_km",
            reason: "must be greater than zero".into(),
        });
    }
    let kind = VehicleKind::parse(kind).ok_or_else(|| Error::UnknownKind {
        what: "vehicle",
        given: kind.into(),
        expected: VEHICLE_KINDS.to_vec(),
    })?;

    let id = ids::fresh_id(config.id_len, |id| registry.vehicle_by_id(id).is_some());
    registry.add_vehicle(Vehicle {
        id: id.clone(),
        brand: brand.trim().into(),
        model: model.trim().into(),
        range_km,
        kind,
    });
    debug!(%id, %kind, "vehicle created");
    Ok(id)
}

/// Attach an existing vehicle to a user's owned list.
pub fn attach_vehicle(registry: &mut Registry, cedula: &str, vehicle_id: &str) -> Result<()> {
    if registry.vehicle_by_id(vehicle_id).is_none() {
        return Err(Error::VehicleNotFound {
            id: vehicle_id.into(),
        });
    }

    let vehicles = owned_vehicles_mut(registry, cedula)?;
    if vehicles.iter().any(|v| v == vehicle_id) {
        return Err(Error::AlreadyAttached {
            entity: "Vehicle",
            id: vehicle_id.into(),
            cedula: cedula.into(),
        });
    }
    vehicles.push(vehicle_id.into());
    debug!(cedula, vehicle_id, "vehicle attached");
    Ok(())
}

/// Detach a vehicle from a user and drop it from the registry. A detached
/// vehicle has no owner, so nothing keeps it alive.
pub fn detach_vehicle(registry: &mut Registry, cedula: &str, vehicle_id: &str) -> Result<()> {
    let vehicles = owned_vehicles_mut(registry, cedula)?;
    let Some(pos) = vehicles.iter().position(|v| v == vehicle_id) else {
        return Err(Error::NotAttached {
            entity: "Vehicle",
            id: vehicle_id.into(),
            cedula: cedula.into(),
        });
    };
    vehicles.remove(pos);
    registry.remove_vehicle(vehicle_id);
    debug!(cedula, vehicle_id, "vehicle detached and removed");
    Ok(())
}

/// Dashboard flow: create a vehicle and attach it to the user in one step.
pub fn register_vehicle(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    brand: &str,
    model: &str,
    range_km: u32,
    kind: &str,
) -> Result<String> {
    // Check the owner up front so a bad cedula does not leave an orphan
    // vehicle behind.
    owned_vehicles_mut(registry, cedula)?;

    let id = create_vehicle(registry, config, brand, model, range_km, kind)?;
    attach_vehicle(registry, cedula, &id)?;
    Ok(id)
}

/// Resolve a user's owned vehicle ids to vehicles.
pub fn vehicles_of<'r>(registry: &'r Registry, cedula: &str) -> Result<Vec<&'r Vehicle>> {
    let person = registry
        .person_by_cedula(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &person.role {
        Role::User { vehicles, .. } => Ok(vehicles
            .iter()
            .filter_map(|id| registry.vehicle_by_id(id))
            .collect()),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "user",
        }),
    }
}

fn owned_vehicles_mut<'r>(registry: &'r mut Registry, cedula: &str) -> Result<&'r mut Vec<String>> {
    let person = registry
        .person_by_cedula_mut(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &mut person.role {
        Role::User { vehicles, .. } => Ok(vehicles),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "user",
        }),
    }
}

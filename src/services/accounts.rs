// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::config::Config;
use crate::domain::Person;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::services::validate;

/// Register a user. The cedula must be free across all roles and the email
/// free among users (the user login key).
pub fn register_user(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    name: &str,
    phone: &str,
    password: &str,
    email: &str,
) -> Result<()> {
    validate::person_fields(config, cedula, name, phone, password, email)?;

    if registry.person_by_cedula(cedula).is_some() {
        return Err(Error::DuplicateCedula {
            cedula: cedula.into(),
        });
    }
    if registry.user_by_email(email).is_some() {
        return Err(Error::DuplicateEmail {
            email: email.into(),
        });
    }

    registry.add_person(Person::new_user(cedula, name, phone, password, email));
    debug!(cedula, role = "user", "person registered");
    Ok(())
}

pub fn register_admin(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    name: &str,
    phone: &str,
    password: &str,
    email: &str,
) -> Result<()> {
    validate::person_fields(config, cedula, name, phone, password, email)?;

    if registry.person_by_cedula(cedula).is_some() {
        return Err(Error::DuplicateCedula {
            cedula: cedula.into(),
        });
    }

    registry.add_person(Person::new_admin(cedula, name, phone, password, email));
    debug!(cedula, role = "admin", "person registered");
    Ok(())
}

pub fn register_provider(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    name: &str,
    phone: &str,
    password: &str,
    email: &str,
) -> Result<()> {
    validate::person_fields(config, cedula, name, phone, password, email)?;

    if registry.person_by_cedula(cedula).is_some() {
        return Err(Error::DuplicateCedula {
            cedula: cedula.into(),
        });
    }

    registry.add_person(Person::new_provider(cedula, name, phone, password, email));
    debug!(cedula, role = "provider", "person registered");
    Ok(())
}

/// Authenticate a user by email. Unknown email, wrong password, and blank
/// input all collapse into `InvalidCredentials` so the error never leaks
/// which part was wrong.
pub fn authenticate_user<'r>(
    registry: &'r Registry,
    email: &str,
    password: &str,
) -> Result<&'r Person> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(Error::InvalidCredentials);
    }

    let person = registry
        .user_by_email(email)
        .ok_or(Error::InvalidCredentials)?;
    if person.password != password {
        return Err(Error::InvalidCredentials);
    }
    debug!(cedula = %person.cedula, "user authenticated");
    Ok(person)
}

/// Authenticate an admin by cedula.
pub fn authenticate_admin<'r>(
    registry: &'r Registry,
    cedula: &str,
    password: &str,
) -> Result<&'r Person> {
    authenticate_by_cedula(registry, cedula, password, "admin", Person::is_admin)
}

/// Authenticate a provider by cedula.
pub fn authenticate_provider<'r>(
    registry: &'r Registry,
    cedula: &str,
    password: &str,
) -> Result<&'r Person> {
    authenticate_by_cedula(registry, cedula, password, "provider", Person::is_provider)
}

fn authenticate_by_cedula<'r>(
    registry: &'r Registry,
    cedula: &str,
    password: &str,
    role: &'static str,
    has_role: impl Fn(&Person) -> bool,
) -> Result<&'r Person> {
    if cedula.trim().is_empty() || password.trim().is_empty() {
        return Err(Error::InvalidCredentials);
    }

    let person = registry
        .person_by_cedula(cedula)
        .ok_or(Error::InvalidCredentials)?;
    if !has_role(person) || person.password != password {
        return Err(Error::InvalidCredentials);
    }
    debug!(cedula = %person.cedula, role, "person authenticated");
    Ok(person)
}

/// Remove a person from the directory. Entities attached to them
/// (vehicles, items, posts) stay in the registry.
pub fn remove_person(registry: &mut Registry, cedula: &str) -> Result<()> {
    if !registry.remove_person(cedula) {
        return Err(Error::PersonNotFound {
            cedula: cedula.into(),
        });
    }
    debug!(cedula, "person removed");
    Ok(())
}

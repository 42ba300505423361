// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::domain::{Person, Role};
use crate::error::{Error, Result};
use crate::registry::Registry;

// Friendship is one-directional: adding B to A's list does not touch B's.

/// Add `friend` to the friend list of `cedula`. Both must exist and be users.
pub fn add_friend(registry: &mut Registry, cedula: &str, friend: &str) -> Result<()> {
    if cedula == friend {
        return Err(Error::SelfFriendship);
    }

    require_user(registry, friend)?;
    let friends = friends_mut(registry, cedula)?;

    if friends.iter().any(|f| f == friend) {
        return Err(Error::AlreadyFriends {
            cedula: cedula.into(),
            friend: friend.into(),
        });
    }
    friends.push(friend.into());
    debug!(cedula, friend, "friend added");
    Ok(())
}

/// Remove `friend` from the friend list of `cedula`.
pub fn remove_friend(registry: &mut Registry, cedula: &str, friend: &str) -> Result<()> {
    let friends = friends_mut(registry, cedula)?;

    let Some(pos) = friends.iter().position(|f| f == friend) else {
        return Err(Error::NotFriends {
            cedula: cedula.into(),
            friend: friend.into(),
        });
    };
    friends.remove(pos);
    debug!(cedula, friend, "friend removed");
    Ok(())
}

/// Resolve the friend list of `cedula` to people. Friends whose accounts
/// were removed since are silently skipped.
pub fn friends_of<'r>(registry: &'r Registry, cedula: &str) -> Result<Vec<&'r Person>> {
    let person = require_user(registry, cedula)?;

    let Role::User { friends, .. } = &person.role else {
        return Ok(Vec::new());
    };
    Ok(friends
        .iter()
        .filter_map(|f| registry.person_by_cedula(f))
        .collect())
}

fn require_user<'r>(registry: &'r Registry, cedula: &str) -> Result<&'r Person> {
    let person = registry
        .person_by_cedula(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    if !person.is_user() {
        return Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "user",
        });
    }
    Ok(person)
}

fn friends_mut<'r>(registry: &'r mut Registry, cedula: &str) -> Result<&'r mut Vec<String>> {
    let person = registry
        .person_by_cedula_mut(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &mut person.role {
        Role::User { friends, .. } => Ok(friends),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "user",
        }),
    }
}

// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use chrono::Local;
use tracing::debug;

use crate::config::Config;
use crate::domain::{Item, ItemKind, Post, PostKind, Role};
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::services::{ids, validate};

const ITEM_KINDS: &[&str] = &["service", "product"];
const POST_KINDS: &[&str] = &["event", "promotion"];

// ─── Items ───

/// Create an item in the registry without attaching it to a provider.
pub fn create_item(
    registry: &mut Registry,
    config: &Config,
    name: &str,
    description: &str,
    kind: &str,
) -> Result<String> {
    validate::non_blank("name", name)?;
    validate::non_blank("description", description)?;
    let kind = ItemKind::parse(kind).ok_or_else(|| Error::UnknownKind {
        what: "item",
        given: kind.into(),
        expected: ITEM_KINDS.to_vec(),
    })?;

    let id = ids::fresh_id(config.id_len, |id| registry.item_by_id(id).is_some());
    registry.add_item(Item {
        id: id.clone(),
        name: name.trim().into(),
        description: description.trim().into(),
        kind,
    });
    debug!(%id, %kind, "item created");
    Ok(id)
}

/// Attach an existing item to a provider's catalog.
pub fn attach_item(registry: &mut Registry, cedula: &str, item_id: &str) -> Result<()> {
    if registry.item_by_id(item_id).is_none() {
        return Err(Error::ItemNotFound { id: item_id.into() });
    }

    let items = provider_items_mut(registry, cedula)?;
    if items.iter().any(|i| i == item_id) {
        return Err(Error::AlreadyAttached {
            entity: "Item",
            id: item_id.into(),
            cedula: cedula.into(),
        });
    }
    items.push(item_id.into());
    debug!(cedula, item_id, "item attached");
    Ok(())
}

/// Dashboard flow: create an item and put it in the provider's catalog.
pub fn offer_item(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    name: &str,
    description: &str,
    kind: &str,
) -> Result<String> {
    provider_items_mut(registry, cedula)?;

    let id = create_item(registry, config, name, description, kind)?;
    attach_item(registry, cedula, &id)?;
    Ok(id)
}

/// Resolve a provider's catalog ids to items.
pub fn items_of<'r>(registry: &'r Registry, cedula: &str) -> Result<Vec<&'r Item>> {
    let person = registry
        .person_by_cedula(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &person.role {
        Role::Provider { items, .. } => Ok(items
            .iter()
            .filter_map(|id| registry.item_by_id(id))
            .collect()),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "provider",
        }),
    }
}

// ─── Posts ───

/// Create a post. `created_on` is stamped with today's local date.
pub fn create_post(
    registry: &mut Registry,
    config: &Config,
    title: &str,
    description: &str,
    kind: &str,
) -> Result<String> {
    validate::non_blank("title", title)?;
    validate::non_blank("description", description)?;
    let kind = PostKind::parse(kind).ok_or_else(|| Error::UnknownKind {
        what: "post",
        given: kind.into(),
        expected: POST_KINDS.to_vec(),
    })?;

    let id = ids::fresh_id(config.id_len, |id| registry.post_by_id(id).is_some());
    registry.add_post(Post {
        id: id.clone(),
        title: title.trim().into(),
        description: description.trim().into(),
        created_on: Local::now().date_naive(),
        kind,
    });
    debug!(%id, %kind, "post created");
    Ok(id)
}

/// Attach an existing post to a provider's profile.
pub fn attach_post(registry: &mut Registry, cedula: &str, post_id: &str) -> Result<()> {
    if registry.post_by_id(post_id).is_none() {
        return Err(Error::PostNotFound { id: post_id.into() });
    }

    let posts = provider_posts_mut(registry, cedula)?;
    if posts.iter().any(|p| p == post_id) {
        return Err(Error::AlreadyAttached {
            entity: "Post",
            id: post_id.into(),
            cedula: cedula.into(),
        });
    }
    posts.push(post_id.into());
    debug!(cedula, post_id, "post attached");
    Ok(())
}

/// Dashboard flow: create a post and publish it under the provider.
pub fn publish_post(
    registry: &mut Registry,
    config: &Config,
    cedula: &str,
    title: &str,
    description: &str,
    kind: &str,
) -> Result<String> {
    provider_posts_mut(registry, cedula)?;

    let id = create_post(registry, config, title, description, kind)?;
    attach_post(registry, cedula, &id)?;
    Ok(id)
}

/// Resolve a provider's post ids to posts.
pub fn posts_of<'r>(registry: &'r Registry, cedula: &str) -> Result<Vec<&'r Post>> {
    let person = registry
        .person_by_cedula(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &person.role {
        Role::Provider { posts, .. } => Ok(posts
            .iter()
            .filter_map(|id| registry.post_by_id(id))
            .collect()),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "provider",
        }),
    }
}

fn provider_items_mut<'r>(registry: &'r mut Registry, cedula: &str) -> Result<&'r mut Vec<String>> {
    let person = registry
        .person_by_cedula_mut(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &mut person.role {
        Role::Provider { items, .. } => Ok(items),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "provider",
        }),
    }
}

fn provider_posts_mut<'r>(registry: &'r mut Registry, cedula: &str) -> Result<&'r mut Vec<String>> {
    let person = registry
        .person_by_cedula_mut(cedula)
        .ok_or_else(|| Error::PersonNotFound {
            cedula: cedula.into(),
        })?;
    match &mut person.role {
        Role::Provider { posts, .. } => Ok(posts),
        _ => Err(Error::RoleMismatch {
            cedula: cedula.into(),
            expected: "provider",
        }),
    }
}

// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

use crate::domain::{Item, Person, Post, Role, Vehicle};

/// In-memory store for every entity in the system.
///
/// Plain owned struct, one per session; nothing survives process exit.
/// Lookups are linear scans over unbounded `Vec`s and uniqueness is only
/// enforced by a contains-check at insertion time: inserting an entity
/// whose natural key is already present is a no-op that reports `false`.
#[derive(Debug, Default)]
pub struct Registry {
    people: Vec<Person>,
    vehicles: Vec<Vehicle>,
    items: Vec<Item>,
    posts: Vec<Post>,
}

/// Per-category entity counts, as shown by the directory report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub people: usize,
    pub users: usize,
    pub admins: usize,
    pub providers: usize,
    pub vehicles: usize,
    pub items: usize,
    pub posts: usize,
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Directory stats:")?;
        writeln!(f, "  People:    {}", self.people)?;
        writeln!(f, "  Users:     {}", self.users)?;
        writeln!(f, "  Admins:    {}", self.admins)?;
        writeln!(f, "  Providers: {}", self.providers)?;
        writeln!(f, "  Vehicles:  {}", self.vehicles)?;
        writeln!(f, "  Items:     {}", self.items)?;
        write!(f, "  Posts:     {}", self.posts)
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── People ───

    /// Insert a person unless the cedula is already taken.
    pub fn add_person(&mut self, person: Person) -> bool {
        if self.person_by_cedula(&person.cedula).is_some() {
            return false;
        }
        self.people.push(person);
        true
    }

    pub fn person_by_cedula(&self, cedula: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.cedula == cedula)
    }

    pub fn person_by_cedula_mut(&mut self, cedula: &str) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.cedula == cedula)
    }

    /// Login key for users. Only people with the User role are considered;
    /// a provider registered under the same email is never returned.
    pub fn user_by_email(&self, email: &str) -> Option<&Person> {
        self.people
            .iter()
            .filter(|p| p.is_user())
            .find(|p| p.email == email)
    }

    pub fn remove_person(&mut self, cedula: &str) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p.cedula != cedula);
        self.people.len() != before
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn users(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| p.is_user()).collect()
    }

    pub fn admins(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| p.is_admin()).collect()
    }

    pub fn providers(&self) -> Vec<&Person> {
        self.people.iter().filter(|p| p.is_provider()).collect()
    }

    // ─── Vehicles ───

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> bool {
        if self.vehicle_by_id(&vehicle.id).is_some() {
            return false;
        }
        self.vehicles.push(vehicle);
        true
    }

    pub fn vehicle_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn remove_vehicle(&mut self, id: &str) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);
        self.vehicles.len() != before
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    // ─── Items ───

    pub fn add_item(&mut self, item: Item) -> bool {
        if self.item_by_id(&item.id).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // ─── Posts ───

    pub fn add_post(&mut self, post: Post) -> bool {
        if self.post_by_id(&post.id).is_some() {
            return false;
        }
        self.posts.push(post);
        true
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn remove_post(&mut self, id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        self.posts.len() != before
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    // ─── Stats ───

    pub fn stats(&self) -> RegistryStats {
        let mut users = 0;
        let mut admins = 0;
        let mut providers = 0;
        for person in &self.people {
            match person.role {
                Role::User { .. } => users += 1,
                Role::Admin => admins += 1,
                Role::Provider { .. } => providers += 1,
            }
        }
        RegistryStats {
            people: self.people.len(),
            users,
            admins,
            providers,
            vehicles: self.vehicles.len(),
            items: self.items.len(),
            posts: self.posts.len(),
        }
    }
}

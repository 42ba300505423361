// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Role-specific payload carried by a [`Person`].
///
/// Users own vehicles and keep a friend list; providers own a catalog of
/// items and a list of published posts. Both lists hold keys (vehicle/item/
/// post ids, friend cedulas), never the entities themselves; the registry
/// is the single owner of every entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User {
        vehicles: Vec<String>,
        friends: Vec<String>,
    },
    Admin,
    Provider {
        items: Vec<String>,
        posts: Vec<String>,
    },
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User { .. } => "user",
            Self::Admin => "admin",
            Self::Provider { .. } => "provider",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered person. The cedula (national ID) is the natural key:
/// two people are the same person iff their cedulas match.
#[derive(Debug, Clone)]
pub struct Person {
    pub cedula: String,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}

impl Person {
    pub fn new_user(
        cedula: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            cedula: cedula.into(),
            name: name.into(),
            phone: phone.into(),
            password: password.into(),
            email: email.into(),
            role: Role::User {
                vehicles: Vec::new(),
                friends: Vec::new(),
            },
        }
    }

    pub fn new_admin(
        cedula: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            cedula: cedula.into(),
            name: name.into(),
            phone: phone.into(),
            password: password.into(),
            email: email.into(),
            role: Role::Admin,
        }
    }

    pub fn new_provider(
        cedula: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            cedula: cedula.into(),
            name: name.into(),
            phone: phone.into(),
            password: password.into(),
            email: email.into(),
            role: Role::Provider {
                items: Vec::new(),
                posts: Vec::new(),
            },
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self.role, Role::User { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    pub fn is_provider(&self) -> bool {
        matches!(self.role, Role::Provider { .. })
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.cedula == other.cedula
    }
}

impl Eq for Person {}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <{}> cedula {} ({})",
            self.name, self.email, self.cedula, self.role
        )
    }
}

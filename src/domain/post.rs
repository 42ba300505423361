// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Event,
    Promotion,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Promotion => "promotion",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "event" => Some(Self::Event),
            "promotion" | "promo" => Some(Self::Promotion),
            _ => None,
        }
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider announcement (event or promotion). `created_on` is stamped
/// once at creation and never updated. Equality is by id.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_on: NaiveDate,
    pub kind: PostKind,
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} ({}, {}) | {}",
            self.id, self.title, self.kind, self.created_on, self.description
        )
    }
}

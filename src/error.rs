// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(rolapet::validate::field))]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("A person with cedula {cedula} is already registered")]
    #[diagnostic(
        code(rolapet::accounts::duplicate_cedula),
        help("The cedula is the natural key; each person registers once")
    )]
    DuplicateCedula { cedula: String },

    #[error("A user with email {email} is already registered")]
    #[diagnostic(code(rolapet::accounts::duplicate_email))]
    DuplicateEmail { email: String },

    #[error("Invalid credentials")]
    #[diagnostic(
        code(rolapet::accounts::invalid_credentials),
        help("Check the email/cedula and password, and that the role matches")
    )]
    InvalidCredentials,

    #[error("No person registered with cedula {cedula}")]
    #[diagnostic(code(rolapet::registry::person_not_found))]
    PersonNotFound { cedula: String },

    #[error("Person with cedula {cedula} is not a {expected}")]
    #[diagnostic(
        code(rolapet::registry::role_mismatch),
        help("This operation only applies to people registered with the {expected} role")
    )]
    RoleMismatch {
        cedula: String,
        expected: &'static str,
    },

    #[error("Users {cedula} and {friend} are already friends")]
    #[diagnostic(code(rolapet::social::already_friends))]
    AlreadyFriends { cedula: String, friend: String },

    #[error("Users {cedula} and {friend} are not friends")]
    #[diagnostic(code(rolapet::social::not_friends))]
    NotFriends { cedula: String, friend: String },

    #[error("A user cannot add themselves as a friend")]
    #[diagnostic(code(rolapet::social::self_friendship))]
    SelfFriendship,

    #[error("{entity} {id} is already attached to {cedula}")]
    #[diagnostic(code(rolapet::catalog::already_attached))]
    AlreadyAttached {
        entity: &'static str,
        id: String,
        cedula: String,
    },

    #[error("{entity} {id} is not attached to {cedula}")]
    #[diagnostic(code(rolapet::catalog::not_attached))]
    NotAttached {
        entity: &'static str,
        id: String,
        cedula: String,
    },

    #[error("No vehicle with id {id}")]
    #[diagnostic(code(rolapet::registry::vehicle_not_found))]
    VehicleNotFound { id: String },

    #[error("No item with id {id}")]
    #[diagnostic(code(rolapet::registry::item_not_found))]
    ItemNotFound { id: String },

    #[error("No post with id {id}")]
    #[diagnostic(code(rolapet::registry::post_not_found))]
    PostNotFound { id: String },

    #[error("Unknown {what} kind: '{given}'. Expected one of: {}", expected.join(", "))]
    #[diagnostic(code(rolapet::domain::unknown_kind))]
    UnknownKind {
        what: &'static str,
        given: String,
        expected: Vec<&'static str>,
    },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(rolapet::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

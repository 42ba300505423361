// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};

static CEDULA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5,15}$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

// Deliberately minimal: one '@' with something on both sides. Full RFC 5322
// matching buys nothing for an in-memory directory.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap());

pub fn non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "must not be blank".into(),
        });
    }
    Ok(())
}

pub fn cedula(value: &str) -> Result<()> {
    non_blank("cedula", value)?;
    if !CEDULA_RE.is_match(value.trim()) {
        return Err(Error::InvalidField {
            field: "cedula",
            reason: format!("'{}' is not a 5-15 digit national ID", value.trim()),
        });
    }
    Ok(())
}

pub fn phone(value: &str) -> Result<()> {
    non_blank("phone", value)?;
    if !PHONE_RE.is_match(value.trim()) {
        return Err(Error::InvalidField {
            field: "phone",
            reason: format!("'{}' is not a 7-15 digit phone number", value.trim()),
        });
    }
    Ok(())
}

pub fn email(value: &str) -> Result<()> {
    non_blank("email", value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(Error::InvalidField {
            field: "email",
            reason: format!("'{}' does not look like an email address", value.trim()),
        });
    }
    Ok(())
}

pub fn password(config: &Config, value: &str) -> Result<()> {
    non_blank("password", value)?;
    if value.trim().len() < config.min_password_len {
        return Err(Error::InvalidField {
            field: "password",
            reason: format!("must be at least {} characters", config.min_password_len),
        });
    }
    Ok(())
}

/// Validate the full field set common to every person role. Rejection
/// happens here, before any registry lookup.
pub fn person_fields(
    config: &Config,
    cedula_value: &str,
    name: &str,
    phone_value: &str,
    password_value: &str,
    email_value: &str,
) -> Result<()> {
    cedula(cedula_value)?;
    non_blank("name", name)?;
    phone(phone_value)?;
    password(config, password_value)?;
    email(email_value)?;
    Ok(())
}

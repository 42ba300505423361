// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use uuid::Uuid;

/// Short entity id: the first `len` hex characters of a fresh UUIDv4.
/// `len` is capped at 32 (the full simple-format UUID).
pub fn short_id(len: usize) -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(len.min(32));
    id
}

/// Generate a short id not yet present according to `in_use`. Collisions
/// on 8 hex chars are rare but not impossible in a long session.
pub fn fresh_id(len: usize, in_use: impl Fn(&str) -> bool) -> String {
    loop {
        let id = short_id(len);
        if !in_use(&id) {
            return id;
        }
    }
}

// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

mod item;
mod person;
mod post;
mod vehicle;

pub use item::*;
pub use person::*;
pub use post::*;
pub use vehicle::*;

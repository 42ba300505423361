// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod accounts;
pub mod catalog;
pub mod fleet;
pub mod ids;
pub mod social;
pub mod validate;

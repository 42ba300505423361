// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Scooter,
    ElectricMotorcycle,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scooter => "scooter",
            Self::ElectricMotorcycle => "electric motorcycle",
        }
    }

    /// Parse a user-facing kind label. Accepts the short forms the
    /// registration forms historically used ("moto").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scooter" => Some(Self::Scooter),
            "moto" | "motorcycle" | "electric motorcycle" | "electric-motorcycle" => {
                Some(Self::ElectricMotorcycle)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An electric vehicle owned by a user. Equality is by id.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub model: String,
    /// Battery range in kilometers. Always > 0 for stored vehicles.
    pub range_km: u32,
    pub kind: VehicleKind,
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vehicle {}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} {} | {} km | {}",
            self.id, self.brand, self.model, self.range_km, self.kind
        )
    }
}

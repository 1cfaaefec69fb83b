//! Semantic tags for the objects shown in a system view.
//!
//! `EntityKind` says what a world object *is*. The visual that represents it
//! is a [`VisualRole`]; most kinds have exactly one, zones pick theirs from
//! their shape and purpose via [`VisualRole::for_zone`].

use std::{fmt, str::FromStr};

use crate::data_structures::{color::Color, model::VisualRole};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    None,
    LightSource,
    Sun,
    Planet,
    Station,
    Satellite,
    Construct,
    Depot,
    Ship,
    WeaponsPlatform,
    DockingRing,
    JumpHole,
    JumpGate,
    TradeLane,
    Zone,
    System,
}

impl EntityKind {
    pub const ALL: [EntityKind; 16] = [
        EntityKind::None,
        EntityKind::LightSource,
        EntityKind::Sun,
        EntityKind::Planet,
        EntityKind::Station,
        EntityKind::Satellite,
        EntityKind::Construct,
        EntityKind::Depot,
        EntityKind::Ship,
        EntityKind::WeaponsPlatform,
        EntityKind::DockingRing,
        EntityKind::JumpHole,
        EntityKind::JumpGate,
        EntityKind::TradeLane,
        EntityKind::Zone,
        EntityKind::System,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::None => "None",
            EntityKind::LightSource => "LightSource",
            EntityKind::Sun => "Sun",
            EntityKind::Planet => "Planet",
            EntityKind::Station => "Station",
            EntityKind::Satellite => "Satellite",
            EntityKind::Construct => "Construct",
            EntityKind::Depot => "Depot",
            EntityKind::Ship => "Ship",
            EntityKind::WeaponsPlatform => "WeaponsPlatform",
            EntityKind::DockingRing => "DockingRing",
            EntityKind::JumpHole => "JumpHole",
            EntityKind::JumpGate => "JumpGate",
            EntityKind::TradeLane => "TradeLane",
            EntityKind::Zone => "Zone",
            EntityKind::System => "System",
        }
    }

    /// The visual used when nothing more specific is known about the object.
    ///
    /// Zones fall back to a plain sphere; callers that know the zone's shape
    /// should use [`VisualRole::for_zone`] instead.
    pub fn default_role(self) -> Option<VisualRole> {
        let role = match self {
            EntityKind::None => return None,
            EntityKind::LightSource => VisualRole::LightSource,
            EntityKind::Sun => VisualRole::Sun,
            EntityKind::Planet => VisualRole::Planet,
            EntityKind::Station => VisualRole::Station,
            EntityKind::Satellite => VisualRole::Satellite,
            EntityKind::Construct => VisualRole::Construct,
            EntityKind::Depot => VisualRole::Depot,
            EntityKind::Ship => VisualRole::Ship,
            EntityKind::WeaponsPlatform => VisualRole::WeaponsPlatform,
            EntityKind::DockingRing => VisualRole::DockingRing,
            EntityKind::JumpHole => VisualRole::JumpHole,
            EntityKind::JumpGate => VisualRole::JumpGate,
            EntityKind::TradeLane => VisualRole::TradeLane,
            EntityKind::Zone => VisualRole::ZoneSphere,
            EntityKind::System => VisualRole::System,
        };
        Some(role)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown entity kind `{s}`"))
    }
}

/// Geometric shape of a zone as authored in the system file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneShape {
    Sphere,
    Ellipsoid,
    Box,
    Cylinder,
    Ring,
}

/// What a zone is used for, which decides how it is tinted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ZoneKind {
    #[default]
    Plain,
    Exclusion,
    Vignette,
    PathPatrol,
    PathTrade,
}

/// Which kinds of connection link two systems on the universe map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConnectionKind {
    JumpHole,
    JumpGate,
    Both,
    #[default]
    None,
}

impl ConnectionKind {
    pub const ALL: [ConnectionKind; 4] = [
        ConnectionKind::JumpHole,
        ConnectionKind::JumpGate,
        ConnectionKind::Both,
        ConnectionKind::None,
    ];

    pub fn from_flags(jump_hole: bool, jump_gate: bool) -> Self {
        match (jump_hole, jump_gate) {
            (true, true) => ConnectionKind::Both,
            (true, false) => ConnectionKind::JumpHole,
            (false, true) => ConnectionKind::JumpGate,
            (false, false) => ConnectionKind::None,
        }
    }

    /// Line color for the connection on the universe map.
    pub fn color(self) -> Color {
        match self {
            ConnectionKind::JumpHole => Color::ORANGE_RED,
            ConnectionKind::JumpGate => Color::SLATE_GRAY,
            ConnectionKind::Both => Color::SNOW,
            ConnectionKind::None => Color::BLACK,
        }
    }
}

//! Render models: one shared mesh paired with one shared material.

use std::{fmt, str::FromStr, sync::Arc};

use crate::data_structures::{
    content::{ZoneKind, ZoneShape},
    material::Material,
    mesh::MeshGeometry,
};

/// A named rendering configuration. Several roles can belong to one
/// [`EntityKind`](crate::data_structures::content::EntityKind), zones have eleven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisualRole {
    LightSource,
    Sun,
    Planet,
    Station,
    Ship,
    WeaponsPlatform,
    TradeLane,
    JumpHole,
    JumpGate,
    DockingRing,
    Satellite,
    Construct,
    Depot,
    ZoneBox,
    ZoneSphere,
    ZoneCylinder,
    ZoneRing,
    ZonePathPatrol,
    ZonePathTrade,
    ZoneVignette,
    ZoneExclusionBox,
    ZoneExclusionSphere,
    ZoneExclusionCylinder,
    ZoneExclusionRing,
    System,
}

impl VisualRole {
    pub const COUNT: usize = 25;

    pub const ALL: [VisualRole; Self::COUNT] = [
        VisualRole::LightSource,
        VisualRole::Sun,
        VisualRole::Planet,
        VisualRole::Station,
        VisualRole::Ship,
        VisualRole::WeaponsPlatform,
        VisualRole::TradeLane,
        VisualRole::JumpHole,
        VisualRole::JumpGate,
        VisualRole::DockingRing,
        VisualRole::Satellite,
        VisualRole::Construct,
        VisualRole::Depot,
        VisualRole::ZoneBox,
        VisualRole::ZoneSphere,
        VisualRole::ZoneCylinder,
        VisualRole::ZoneRing,
        VisualRole::ZonePathPatrol,
        VisualRole::ZonePathTrade,
        VisualRole::ZoneVignette,
        VisualRole::ZoneExclusionBox,
        VisualRole::ZoneExclusionSphere,
        VisualRole::ZoneExclusionCylinder,
        VisualRole::ZoneExclusionRing,
        VisualRole::System,
    ];

    /// Position in [`VisualRole::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualRole::LightSource => "LightSource",
            VisualRole::Sun => "Sun",
            VisualRole::Planet => "Planet",
            VisualRole::Station => "Station",
            VisualRole::Ship => "Ship",
            VisualRole::WeaponsPlatform => "WeaponsPlatform",
            VisualRole::TradeLane => "TradeLane",
            VisualRole::JumpHole => "JumpHole",
            VisualRole::JumpGate => "JumpGate",
            VisualRole::DockingRing => "DockingRing",
            VisualRole::Satellite => "Satellite",
            VisualRole::Construct => "Construct",
            VisualRole::Depot => "Depot",
            VisualRole::ZoneBox => "ZoneBox",
            VisualRole::ZoneSphere => "ZoneSphere",
            VisualRole::ZoneCylinder => "ZoneCylinder",
            VisualRole::ZoneRing => "ZoneRing",
            VisualRole::ZonePathPatrol => "ZonePathPatrol",
            VisualRole::ZonePathTrade => "ZonePathTrade",
            VisualRole::ZoneVignette => "ZoneVignette",
            VisualRole::ZoneExclusionBox => "ZoneExclusionBox",
            VisualRole::ZoneExclusionSphere => "ZoneExclusionSphere",
            VisualRole::ZoneExclusionCylinder => "ZoneExclusionCylinder",
            VisualRole::ZoneExclusionRing => "ZoneExclusionRing",
            VisualRole::System => "System",
        }
    }

    /// Picks the zone visual. Paths and vignettes look the same whatever
    /// their shape; ellipsoids are drawn as (scaled) spheres.
    pub fn for_zone(shape: ZoneShape, kind: ZoneKind) -> Self {
        match kind {
            ZoneKind::PathPatrol => VisualRole::ZonePathPatrol,
            ZoneKind::PathTrade => VisualRole::ZonePathTrade,
            ZoneKind::Vignette => VisualRole::ZoneVignette,
            ZoneKind::Plain => match shape {
                ZoneShape::Sphere | ZoneShape::Ellipsoid => VisualRole::ZoneSphere,
                ZoneShape::Box => VisualRole::ZoneBox,
                ZoneShape::Cylinder => VisualRole::ZoneCylinder,
                ZoneShape::Ring => VisualRole::ZoneRing,
            },
            ZoneKind::Exclusion => match shape {
                ZoneShape::Sphere | ZoneShape::Ellipsoid => VisualRole::ZoneExclusionSphere,
                ZoneShape::Box => VisualRole::ZoneExclusionBox,
                ZoneShape::Cylinder => VisualRole::ZoneExclusionCylinder,
                ZoneShape::Ring => VisualRole::ZoneExclusionRing,
            },
        }
    }
}

impl fmt::Display for VisualRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for VisualRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisualRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown visual role `{s}`"))
    }
}

/**
 * A renderable pairing of geometry and material.
 *
 * Both halves are shared: two models with the same mesh hold clones of the
 * same `Arc`, so the scene can batch them and the GPU side only uploads once.
 */
#[derive(Debug)]
pub struct RenderModel {
    role: VisualRole,
    mesh: Arc<MeshGeometry>,
    material: Arc<Material>,
}

impl RenderModel {
    pub fn new(role: VisualRole, mesh: Arc<MeshGeometry>, material: Arc<Material>) -> Self {
        Self {
            role,
            mesh,
            material,
        }
    }

    pub fn role(&self) -> VisualRole {
        self.role
    }

    pub fn name(&self) -> &'static str {
        self.role.name()
    }

    pub fn mesh(&self) -> &Arc<MeshGeometry> {
        &self.mesh
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

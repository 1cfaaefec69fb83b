//! The shared resource tables.
//!
//! Materials and meshes are the leaves, models pair them up. Everything is
//! built once and handed out behind `Arc`, so hundreds of scene nodes can
//! point at the same model and the renderer can batch them.

use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::{
    data_structures::{
        color::Color,
        content::{ConnectionKind, EntityKind},
        material::Material,
        mesh::MeshGeometry,
        model::{RenderModel, VisualRole},
    },
    resources::primitives::{
        BoxMesh, CylinderMesh, MeshGenerator, OctahedronMesh, PyramidMesh, SphereMesh, SurfaceMesh,
    },
};

#[derive(Debug)]
pub struct SharedMaterials {
    pub light_source: Arc<Material>,
    pub sun: Arc<Material>,
    pub planet: Arc<Material>,
    pub station: Arc<Material>,
    pub satellite: Arc<Material>,
    pub construct: Arc<Material>,
    pub depot: Arc<Material>,
    pub ship: Arc<Material>,
    pub weapons_platform: Arc<Material>,
    pub trade_lane: Arc<Material>,
    pub jump_hole_and_gate: Arc<Material>,
    pub docking_ring: Arc<Material>,
    /// For objects drawn from their own model file rather than a primitive.
    pub cmp_model: Arc<Material>,
    pub zone: Arc<Material>,
    pub zone_path_trade: Arc<Material>,
    pub zone_vignette: Arc<Material>,
    pub zone_exclusion: Arc<Material>,
    pub system: Arc<Material>,
}

impl SharedMaterials {
    pub fn new() -> Self {
        let diffuse = |name, color| Arc::new(Material::diffuse(name, color));
        let emissive = |name, color| Arc::new(Material::emissive(name, color));
        Self {
            light_source: emissive("LightSource", Color::rgb(120, 120, 0)),
            sun: diffuse("Sun", Color::ORANGE),
            planet: diffuse("Planet", Color::rgb(0, 60, 120)),
            station: diffuse("Station", Color::ORANGE_RED),
            satellite: diffuse("Satellite", Color::BLUE_VIOLET),
            construct: diffuse("Construct", Color::FUCHSIA),
            depot: diffuse("Depot", Color::SLATE_GRAY),
            ship: diffuse("Ship", Color::GOLD),
            weapons_platform: diffuse("WeaponsPlatform", Color::BURLY_WOOD),
            trade_lane: diffuse("TradeLane", Color::CYAN),
            jump_hole_and_gate: diffuse("JumpHoleAndGate", Color::DARK_GREEN),
            docking_ring: diffuse("DockingRing", Color::FIREBRICK),
            cmp_model: diffuse("CmpModel", Color::SLATE_GRAY),
            zone: emissive("Zone", Color::rgb(30, 30, 30)),
            zone_path_trade: emissive("ZonePathTrade", Color::rgb(10, 15, 30)),
            zone_vignette: emissive("ZoneVignette", Color::rgb(0, 30, 15)),
            zone_exclusion: emissive("ZoneExclusion", Color::rgb(30, 15, 0)),
            system: diffuse("System", Color::LIGHT_YELLOW),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Material>> {
        [
            &self.light_source,
            &self.sun,
            &self.planet,
            &self.station,
            &self.satellite,
            &self.construct,
            &self.depot,
            &self.ship,
            &self.weapons_platform,
            &self.trade_lane,
            &self.jump_hole_and_gate,
            &self.docking_ring,
            &self.cmp_model,
            &self.zone,
            &self.zone_path_trade,
            &self.zone_vignette,
            &self.zone_exclusion,
            &self.system,
        ]
        .into_iter()
    }
}

impl Default for SharedMaterials {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct SharedMeshes {
    pub sphere: Arc<MeshGeometry>,
    pub r#box: Arc<MeshGeometry>,
    /// Flattened box for trade lane rings.
    pub box_trade_lane: Arc<MeshGeometry>,
    pub cylinder: Arc<MeshGeometry>,
    /// Short, thin cylinder for jump holes and docking rings.
    pub cylinder_ring: Arc<MeshGeometry>,
    pub pyramid: Arc<MeshGeometry>,
    pub octahedron: Arc<MeshGeometry>,
    pub surface: Arc<MeshGeometry>,
}

impl SharedMeshes {
    pub fn new() -> anyhow::Result<Self> {
        fn shared(generator: impl MeshGenerator, name: &'static str) -> anyhow::Result<Arc<MeshGeometry>> {
            Ok(Arc::new(generator.generate(name)?))
        }

        Ok(Self {
            sphere: shared(
                SphereMesh {
                    slices: 18,
                    stacks: 9,
                    ..Default::default()
                },
                "Sphere",
            )?,
            r#box: shared(BoxMesh::default(), "Box")?,
            box_trade_lane: shared(
                BoxMesh {
                    height: 0.3,
                    ..Default::default()
                },
                "BoxTradeLane",
            )?,
            cylinder: shared(
                CylinderMesh {
                    slices: 18,
                    ..Default::default()
                },
                "Cylinder",
            )?,
            cylinder_ring: shared(
                CylinderMesh {
                    radius: 0.5,
                    length: 0.25,
                    slices: 12,
                },
                "CylinderRing",
            )?,
            pyramid: shared(PyramidMesh::default(), "Pyramid")?,
            octahedron: shared(OctahedronMesh::default(), "Octahedron")?,
            surface: shared(
                SurfaceMesh {
                    width: 2.0,
                    ..Default::default()
                },
                "Surface",
            )?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MeshGeometry>> {
        [
            &self.sphere,
            &self.r#box,
            &self.box_trade_lane,
            &self.cylinder,
            &self.cylinder_ring,
            &self.pyramid,
            &self.octahedron,
            &self.surface,
        ]
        .into_iter()
    }
}

/// One model per [`VisualRole`], stored in role order.
#[derive(Debug)]
pub struct SharedModels {
    models: Vec<Arc<RenderModel>>,
}

impl SharedModels {
    pub fn new(meshes: &SharedMeshes, materials: &SharedMaterials) -> Self {
        let models = VisualRole::ALL
            .into_iter()
            .map(|role| {
                let (mesh, material) = Self::parts(role, meshes, materials);
                Arc::new(RenderModel::new(role, Arc::clone(mesh), Arc::clone(material)))
            })
            .collect();
        Self { models }
    }

    fn parts<'a>(
        role: VisualRole,
        meshes: &'a SharedMeshes,
        materials: &'a SharedMaterials,
    ) -> (&'a Arc<MeshGeometry>, &'a Arc<Material>) {
        let (m, t) = (meshes, materials);
        match role {
            VisualRole::LightSource => (&m.octahedron, &t.light_source),
            VisualRole::Sun => (&m.sphere, &t.sun),
            VisualRole::Planet => (&m.sphere, &t.planet),
            VisualRole::Station => (&m.r#box, &t.station),
            VisualRole::Ship => (&m.pyramid, &t.ship),
            VisualRole::WeaponsPlatform => (&m.r#box, &t.weapons_platform),
            VisualRole::TradeLane => (&m.box_trade_lane, &t.trade_lane),
            VisualRole::JumpHole => (&m.cylinder_ring, &t.jump_hole_and_gate),
            VisualRole::JumpGate => (&m.pyramid, &t.jump_hole_and_gate),
            VisualRole::DockingRing => (&m.cylinder_ring, &t.docking_ring),
            VisualRole::Satellite => (&m.r#box, &t.satellite),
            VisualRole::Construct => (&m.r#box, &t.construct),
            VisualRole::Depot => (&m.r#box, &t.depot),
            VisualRole::ZoneBox => (&m.r#box, &t.zone),
            VisualRole::ZoneSphere => (&m.sphere, &t.zone),
            VisualRole::ZoneCylinder => (&m.cylinder, &t.zone),
            // Rings render as full cylinders; the hole is not modelled.
            VisualRole::ZoneRing => (&m.cylinder, &t.zone),
            VisualRole::ZonePathPatrol => (&m.surface, &t.zone),
            VisualRole::ZonePathTrade => (&m.surface, &t.zone_path_trade),
            VisualRole::ZoneVignette => (&m.sphere, &t.zone_vignette),
            VisualRole::ZoneExclusionBox => (&m.r#box, &t.zone_exclusion),
            VisualRole::ZoneExclusionSphere => (&m.sphere, &t.zone_exclusion),
            VisualRole::ZoneExclusionCylinder => (&m.cylinder, &t.zone_exclusion),
            VisualRole::ZoneExclusionRing => (&m.cylinder, &t.zone_exclusion),
            VisualRole::System => (&m.sphere, &t.system),
        }
    }

    pub fn get(&self, role: VisualRole) -> &Arc<RenderModel> {
        &self.models[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<RenderModel>> {
        self.models.iter()
    }
}

/// All three tables. Build one with [`SharedResources::new`] or use the
/// process-wide instance from [`init`].
#[derive(Debug)]
pub struct SharedResources {
    pub materials: SharedMaterials,
    pub meshes: SharedMeshes,
    pub models: SharedModels,
}

impl SharedResources {
    pub fn new() -> anyhow::Result<Self> {
        let materials = SharedMaterials::new();
        let meshes = SharedMeshes::new().context("failed to generate shared meshes")?;
        let models = SharedModels::new(&meshes, &materials);
        log::info!(
            "shared resources ready: {} materials, {} meshes, {} models",
            materials.iter().count(),
            meshes.iter().count(),
            models.iter().count()
        );
        Ok(Self {
            materials,
            meshes,
            models,
        })
    }

    pub fn model(&self, role: VisualRole) -> &Arc<RenderModel> {
        self.models.get(role)
    }

    /// `None` only for [`EntityKind::None`], which has nothing to draw.
    pub fn model_for_kind(&self, kind: EntityKind) -> Option<&Arc<RenderModel>> {
        kind.default_role().map(|role| self.model(role))
    }

    pub fn model_by_name(&self, name: &str) -> anyhow::Result<&Arc<RenderModel>> {
        let role: VisualRole = name.parse()?;
        Ok(self.model(role))
    }

    pub fn material(&self, name: &str) -> Option<&Arc<Material>> {
        self.materials.iter().find(|m| m.name() == name)
    }

    pub fn mesh(&self, name: &str) -> Option<&Arc<MeshGeometry>> {
        self.meshes.iter().find(|m| m.name() == name)
    }

    /// Same as [`ConnectionKind::color`]; here so map code can get every
    /// visual from the registry it already holds.
    pub fn connection_color(&self, kind: ConnectionKind) -> Color {
        kind.color()
    }
}

static SHARED: OnceLock<SharedResources> = OnceLock::new();

/// Builds the process-wide tables on first call. Later calls return the same instance.
pub fn init() -> anyhow::Result<&'static SharedResources> {
    if let Some(shared) = SHARED.get() {
        log::debug!("shared resources already initialized");
        return Ok(shared);
    }
    let resources = SharedResources::new()?;
    // A concurrent caller may have won the race; its tables are identical and
    // the first one stored is the one everybody keeps seeing.
    Ok(SHARED.get_or_init(|| resources))
}

/// The process-wide tables, if [`init`] has run.
pub fn get() -> Option<&'static SharedResources> {
    SHARED.get()
}

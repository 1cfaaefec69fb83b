//! Prints the shared tables. Run with `RUST_LOG=debug` to see each mesh being generated.

use sector_visuals::{ConnectionKind, EntityKind, resources};

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let shared = resources::init()?;

    println!("Materials:");
    for material in shared.materials.iter() {
        let kind = if material.is_emissive() { "emissive" } else { "diffuse" };
        println!("  {:<16} {:<8} {}", material.name(), kind, material.base_color());
    }

    println!("Meshes:");
    for mesh in shared.meshes.iter() {
        println!(
            "  {:<16} {:>4} vertices {:>4} triangles  {:?}",
            mesh.name(),
            mesh.vertices().len(),
            mesh.triangle_count(),
            mesh.shape()
        );
    }

    println!("Models:");
    for model in shared.models.iter() {
        println!(
            "  {:<22} {:<14} {}",
            model.name(),
            model.mesh().name(),
            model.material().name()
        );
    }

    println!("Entity kinds:");
    for kind in EntityKind::ALL {
        match shared.model_for_kind(kind) {
            Some(model) => println!("  {:<16} -> {}", kind, model.name()),
            None => println!("  {:<16} -> (nothing drawn)", kind),
        }
    }

    println!("Connections:");
    for kind in ConnectionKind::ALL {
        println!("  {:<9} {}", format!("{kind:?}"), shared.connection_color(kind));
    }

    Ok(())
}

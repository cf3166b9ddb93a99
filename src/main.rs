//! meshflip - mirror a mesh along an axis
//!
//! Demo driver: builds a procedural mesh, flips it according to the
//! settings file and logs what changed.

mod settings;

use anyhow::{Context, Result};
use meshflip_core::{EditableMesh, Mesh};
use meshflip_flip::{flip_axis, try_flip_axis};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::FlipSettings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting meshflip...");

    let settings = FlipSettings::load();
    let mut mesh = settings.primitive.build();
    let original = mesh.clone();

    info!(
        "Built {:?}: {} vertices, {} triangles in {} submeshes",
        settings.primitive,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.submesh_count()
    );

    for pass in 1..=settings.passes {
        if settings.checked {
            try_flip_axis(settings.axis, &mut mesh)
                .with_context(|| format!("Flip pass {} rejected the mesh", pass))?;
        } else {
            flip_axis(settings.axis, &mut mesh);
        }
    }

    report(&original, &mesh, &settings);
    Ok(())
}

fn report(original: &Mesh, flipped: &Mesh, settings: &FlipSettings) {
    info!(
        "Flipped along {} x{}: bounds {} .. {} -> {} .. {}",
        settings.axis.name(),
        settings.passes,
        original.bounds.min,
        original.bounds.max,
        flipped.bounds.min,
        flipped.bounds.max
    );
    info!(
        "Signed volume {:.4} -> {:.4}{}",
        original.signed_volume(),
        flipped.signed_volume(),
        if flipped.is_inside_out() { " (inside-out!)" } else { "" }
    );
}

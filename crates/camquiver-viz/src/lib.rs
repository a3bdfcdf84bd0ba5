#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

use camquiver_3d::quiver::{AxisBounds, QuiverScene};

/// Application id shown in the viewer.
pub const APP_ID: &str = "Camera Quiver";

// blue arrows, orange overlays, gray bounding cube, red/green/blue for x/y/z
const ARROW_COLOR: u32 = 0x1F77B4FF;
const OVERLAY_COLOR: u32 = 0xFF7F0EFF;
const BOUNDS_COLOR: u32 = 0x808080FF;
const AXIS_COLORS: [u32; 3] = [0xFF0000FF, 0x00FF00FF, 0x0000FFFF];

/// Log a quiver scene to a Rerun recording stream.
///
/// All entities are logged as static data under `world/`:
///
/// * `world/bounds` - the plotting cube.
/// * `world/axes` - one labelled arrow per axis, running along the cube edges.
/// * `world/quiver` - one arrow per visible sample.
/// * `world/positions` - the sample positions, when the scatter overlay is on.
/// * `world/path` - the path through the positions, when the path overlay is on.
pub fn log_scene(
    rec: &rerun::RecordingStream,
    scene: &QuiverScene,
) -> rerun::RecordingStreamResult<()> {
    rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

    let bounds = scene.bounds();
    rec.log_static(
        "world/bounds",
        &rerun::Boxes3D::from_centers_and_half_sizes(
            [to_f32(&bounds.center())],
            [to_f32(&bounds.half_sizes())],
        )
        .with_colors([BOUNDS_COLOR]),
    )?;

    let (axis_origins, axis_vectors) = axis_arrows(bounds);
    rec.log_static(
        "world/axes",
        &rerun::Arrows3D::from_vectors(axis_vectors)
            .with_origins(axis_origins)
            .with_colors(AXIS_COLORS)
            .with_labels(scene.axis_labels().iter().map(String::as_str)),
    )?;

    let (origins, vectors) = scene
        .arrows()
        .iter()
        .map(|arrow| (to_f32(&arrow.origin), to_f32(&arrow.vector)))
        .collect::<(Vec<_>, Vec<_>)>();
    log::debug!("logging #{} arrows", vectors.len());

    rec.log_static(
        "world/quiver",
        &rerun::Arrows3D::from_vectors(vectors)
            .with_origins(origins)
            .with_colors([ARROW_COLOR]),
    )?;

    if let Some(points) = scene.scatter() {
        let points = points.iter().map(to_f32).collect::<Vec<_>>();
        rec.log_static(
            "world/positions",
            &rerun::Points3D::new(points)
                .with_colors([OVERLAY_COLOR])
                .with_radii([0.03_f32]),
        )?;
    }

    if let Some(strips) = scene.path() {
        let strips = strips
            .iter()
            .map(|strip| strip.iter().map(to_f32).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        rec.log_static(
            "world/path",
            &rerun::LineStrips3D::new(strips).with_colors([OVERLAY_COLOR]),
        )?;
    }

    Ok(())
}

/// Compute the axis arrows for the given bounds.
///
/// Each arrow starts at the minimum corner of the volume and spans its axis
/// completely, so the three arrows trace the axis edges of the cube.
///
/// # Returns
///
/// The arrow origins and vectors, in x, y, z order.
pub fn axis_arrows(bounds: &AxisBounds) -> ([[f32; 3]; 3], [[f32; 3]; 3]) {
    let origin = to_f32(&bounds.min);
    let vectors = [0, 1, 2].map(|axis| {
        let mut v = [0.0; 3];
        v[axis] = (bounds.max[axis] - bounds.min[axis]) as f32;
        v
    });
    ([origin; 3], vectors)
}

fn to_f32(p: &[f64; 3]) -> [f32; 3] {
    [p[0] as f32, p[1] as f32, p[2] as f32]
}

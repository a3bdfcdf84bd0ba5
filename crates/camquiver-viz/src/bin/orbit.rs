use argh::FromArgs;
use std::path::PathBuf;

use camquiver_3d::io::json;
use camquiver_3d::orbit::{self, OrbitCamera, SphericalCoord};

#[derive(FromArgs)]
/// Generate orbit camera samples looking at the origin
struct Args {
    /// path to the output JSON file
    #[argh(
        option,
        short = 'o',
        default = "PathBuf::from(json::DEFAULT_SAMPLES_FILE)"
    )]
    output: PathBuf,

    /// distance of the cameras to the origin
    #[argh(option, default = "1.5")]
    radius: f64,

    /// polar angle from the +z axis in radians
    #[argh(option, default = "std::f64::consts::FRAC_PI_2")]
    theta: f64,

    /// number of samples to generate
    #[argh(option, default = "8")]
    count: usize,

    /// horizontal drag per step; with --drag-dy, records a drag instead of a ring
    #[argh(option, default = "0.0")]
    drag_dx: f64,

    /// vertical drag per step
    #[argh(option, default = "0.0")]
    drag_dy: f64,

    /// drag sensitivity of the orbit camera
    #[argh(option, default = "orbit::DEFAULT_SENSITIVITY")]
    sensitivity: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let samples = if args.drag_dx == 0.0 && args.drag_dy == 0.0 {
        orbit::ring_samples(args.radius, args.theta, args.count)
    } else {
        let start = SphericalCoord {
            radius: args.radius,
            theta: args.theta,
            phi: 0.0,
        };
        let mut camera = OrbitCamera::new(start.to_cartesian()).with_sensitivity(args.sensitivity);
        orbit::drag_samples(
            &mut camera,
            args.drag_dx,
            args.drag_dy,
            args.count.saturating_sub(1),
        )
    };

    json::write_samples_json(&args.output, &samples)?;
    log::info!(
        "Wrote #{} camera samples to {}",
        samples.len(),
        args.output.display()
    );

    Ok(())
}

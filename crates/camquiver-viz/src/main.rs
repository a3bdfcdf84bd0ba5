use argh::FromArgs;
use std::path::PathBuf;

use camquiver_3d::io::json;
use camquiver_3d::quiver::{self, QuiverConfig, QuiverScene};

#[derive(FromArgs)]
/// Plot camera positions and directions as 3D arrows
struct Args {
    /// path to the camera samples JSON file
    #[argh(
        option,
        short = 'i',
        default = "PathBuf::from(json::DEFAULT_SAMPLES_FILE)"
    )]
    input: PathBuf,

    /// half extent of the plotting cube
    #[argh(option, default = "quiver::DEFAULT_HALF_EXTENT")]
    half_extent: f64,

    /// length of every arrow
    #[argh(option, default = "quiver::DEFAULT_ARROW_LENGTH")]
    arrow_length: f64,

    /// also draw the camera positions as points
    #[argh(switch)]
    scatter: bool,

    /// also draw the path through the camera positions
    #[argh(switch)]
    path: bool,

    /// save the recording to an .rrd file instead of spawning the viewer
    #[argh(option)]
    save: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the samples, any malformed record aborts before the viewer starts
    let samples = json::read_samples_json(&args.input)?;
    log::info!(
        "Read #{} camera samples from {}",
        samples.len(),
        args.input.display()
    );

    if let Some(extent) = samples.extent() {
        log::debug!("positions span {:?}..{:?}", extent.min, extent.max);
    }

    let config = QuiverConfig {
        half_extent: args.half_extent,
        arrow_length: args.arrow_length,
        show_scatter: args.scatter,
        show_path: args.path,
        ..Default::default()
    };
    let scene = QuiverScene::build(&samples.columns(), &config)?;

    // create a Rerun recording stream
    let rec = match args.save {
        Some(path) => rerun::RecordingStreamBuilder::new(camquiver_viz::APP_ID).save(path)?,
        None => rerun::RecordingStreamBuilder::new(camquiver_viz::APP_ID).spawn()?,
    };

    camquiver_viz::log_scene(&rec, &scene)?;

    Ok(())
}

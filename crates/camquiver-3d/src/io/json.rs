use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::sample::CameraSamples;

/// Default file name of the camera sample dump.
pub const DEFAULT_SAMPLES_FILE: &str = "cam_pos_dir.json";

/// Error types for the JSON sample module.
#[derive(Debug, thiserror::Error)]
pub enum SampleIoError {
    /// Error reading or writing file
    #[error("error reading or writing file")]
    Io(#[from] std::io::Error),

    /// Malformed document or record
    #[error("Malformed camera samples: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON file of camera samples.
///
/// The file holds an array of objects, each with a `cam_pos` and a `cam_dir`
/// field of three numbers:
///
/// ```json
/// [{"cam_pos": [1.0, 0.0, 0.0], "cam_dir": [0.0, 1.0, 0.0]}]
/// ```
///
/// A record with a missing field or a wrong number of components fails the
/// whole read.
///
/// # Arguments
///
/// * `path` - The path to the JSON file.
///
/// # Returns
///
/// The samples in file order.
pub fn read_samples_json(path: impl AsRef<Path>) -> Result<CameraSamples, SampleIoError> {
    let path = path.as_ref();
    log::debug!("reading camera samples from {}", path.display());

    let file = File::open(path)?;
    read_samples_from_reader(BufReader::new(file))
}

/// Read camera samples from any reader holding the JSON document.
pub fn read_samples_from_reader<R: Read>(reader: R) -> Result<CameraSamples, SampleIoError> {
    let samples: CameraSamples = serde_json::from_reader(reader)?;
    log::debug!("parsed #{} camera samples", samples.len());
    Ok(samples)
}

/// Write camera samples to a JSON file in the format read by [`read_samples_json`].
///
/// # Arguments
///
/// * `path` - The path to the output file. It is created or truncated.
/// * `samples` - The samples to write.
pub fn write_samples_json(
    path: impl AsRef<Path>,
    samples: &CameraSamples,
) -> Result<(), SampleIoError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, samples)?;
    writer.flush()?;
    Ok(())
}

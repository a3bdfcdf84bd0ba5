use crate::linalg;
use crate::sample::QuiverColumns;

/// Default half extent of the plotting cube, giving `[-2, 2]` on every axis.
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

/// Default length of every rendered arrow.
pub const DEFAULT_ARROW_LENGTH: f64 = 1.0;

/// Default axis labels, in x, y, z order.
pub const DEFAULT_AXIS_LABELS: [&str; 3] = ["X-axis Label", "Y-axis Label", "Z-axis Label"];

/// Error types for the quiver module.
#[derive(Debug, thiserror::Error)]
pub enum QuiverError {
    /// The half extent of the plotting cube is not a positive finite number
    #[error("Invalid half extent: {0}. Must be positive and finite")]
    InvalidHalfExtent(f64),

    /// The arrow length is negative or not finite
    #[error("Invalid arrow length: {0}. Must be non-negative and finite")]
    InvalidArrowLength(f64),
}

/// Parameters of the quiver plot.
#[derive(Debug, Clone, PartialEq)]
pub struct QuiverConfig {
    /// Half extent of the cubic plotting volume.
    pub half_extent: f64,
    /// Length of every rendered arrow.
    pub arrow_length: f64,
    /// Labels of the x, y and z axes.
    pub axis_labels: [String; 3],
    /// Also draw the sample positions as points.
    pub show_scatter: bool,
    /// Also draw a polyline through the sample positions.
    pub show_path: bool,
}

impl Default for QuiverConfig {
    fn default() -> Self {
        Self {
            half_extent: DEFAULT_HALF_EXTENT,
            arrow_length: DEFAULT_ARROW_LENGTH,
            axis_labels: DEFAULT_AXIS_LABELS.map(String::from),
            show_scatter: false,
            show_path: false,
        }
    }
}

/// Closed per-axis ranges of the plotting volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower bound of x, y, z.
    pub min: [f64; 3],
    /// Upper bound of x, y, z.
    pub max: [f64; 3],
}

impl AxisBounds {
    /// Create a cube centered at the origin spanning `[-half_extent, half_extent]` on every axis.
    pub fn cube(half_extent: f64) -> Self {
        Self {
            min: [-half_extent; 3],
            max: [half_extent; 3],
        }
    }

    /// Check if a point lies inside the bounds, boundary included.
    pub fn contains(&self, point: &[f64; 3]) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Center of the volume.
    pub fn center(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| 0.5 * (self.min[i] + self.max[i]))
    }

    /// Half sizes of the volume along x, y, z.
    pub fn half_sizes(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| 0.5 * (self.max[i] - self.min[i]))
    }
}

/// One rendered arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Index of the source sample.
    pub index: usize,
    /// Tail of the arrow.
    pub origin: [f64; 3],
    /// Arrow vector, the sample direction rescaled to the arrow length.
    pub vector: [f64; 3],
}

/// Everything needed to draw the quiver plot.
#[derive(Debug, Clone, PartialEq)]
pub struct QuiverScene {
    bounds: AxisBounds,
    axis_labels: [String; 3],
    arrows: Vec<Arrow>,
    num_clipped: usize,
    scatter: Option<Vec<[f64; 3]>>,
    path: Option<Vec<Vec<[f64; 3]>>>,
}

impl QuiverScene {
    /// Build the scene from the quiver columns.
    ///
    /// Every sample whose position lies inside the bounds yields one arrow, in
    /// sample order. Samples outside the bounds are clipped and only counted.
    ///
    /// # Arguments
    ///
    /// * `columns` - The unpacked sample positions and directions.
    /// * `config` - The plot parameters.
    ///
    /// # Returns
    ///
    /// The scene, or an error if the config is invalid.
    pub fn build(columns: &QuiverColumns, config: &QuiverConfig) -> Result<Self, QuiverError> {
        if !(config.half_extent.is_finite() && config.half_extent > 0.0) {
            return Err(QuiverError::InvalidHalfExtent(config.half_extent));
        }
        if !(config.arrow_length.is_finite() && config.arrow_length >= 0.0) {
            return Err(QuiverError::InvalidArrowLength(config.arrow_length));
        }

        let bounds = AxisBounds::cube(config.half_extent);

        let mut arrows = Vec::with_capacity(columns.len());
        let mut num_clipped = 0;

        for (index, (origin, direction)) in columns.rows().enumerate() {
            if !bounds.contains(&origin) {
                num_clipped += 1;
                continue;
            }

            let vector = scale_to_length(&direction, config.arrow_length).unwrap_or_else(|| {
                log::warn!("sample #{index} has a zero direction, drawing an empty arrow");
                [0.0; 3]
            });

            arrows.push(Arrow {
                index,
                origin,
                vector,
            });
        }

        if num_clipped > 0 {
            log::info!(
                "{num_clipped} of {} samples lie outside {:?}..{:?} and are clipped",
                columns.len(),
                bounds.min,
                bounds.max
            );
        }

        let scatter = config.show_scatter.then(|| {
            arrows
                .iter()
                .map(|arrow| arrow.origin)
                .collect::<Vec<_>>()
        });

        let path = config
            .show_path
            .then(|| split_path(columns.rows().map(|(position, _)| position), &bounds));

        Ok(Self {
            bounds,
            axis_labels: config.axis_labels.clone(),
            arrows,
            num_clipped,
            scatter,
            path,
        })
    }

    /// Get the axis bounds of the plot.
    pub fn bounds(&self) -> &AxisBounds {
        &self.bounds
    }

    /// Get the x, y, z axis labels.
    pub fn axis_labels(&self) -> &[String; 3] {
        &self.axis_labels
    }

    /// Get the visible arrows in sample order.
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Get the number of samples left out because they lie outside the bounds.
    pub fn num_clipped(&self) -> usize {
        self.num_clipped
    }

    /// Get the visible sample positions, if the scatter overlay is enabled.
    pub fn scatter(&self) -> Option<&[[f64; 3]]> {
        self.scatter.as_deref()
    }

    /// Get the path strips through the visible positions, if the path overlay is enabled.
    pub fn path(&self) -> Option<&[Vec<[f64; 3]>]> {
        self.path.as_deref()
    }
}

/// Rescale a vector to the given length.
///
/// Returns `None` for a zero vector, which has no direction.
pub fn scale_to_length(vector: &[f64; 3], length: f64) -> Option<[f64; 3]> {
    linalg::normalize(vector).map(|unit| unit.map(|v| v * length))
}

/// Split a sequence of positions into strips of consecutive in-bounds points.
///
/// Strips with fewer than two points draw nothing and are dropped.
fn split_path(
    positions: impl Iterator<Item = [f64; 3]>,
    bounds: &AxisBounds,
) -> Vec<Vec<[f64; 3]>> {
    let mut strips = Vec::new();
    let mut current = Vec::new();

    for position in positions {
        if bounds.contains(&position) {
            current.push(position);
        } else if !current.is_empty() {
            strips.push(std::mem::take(&mut current));
        }
    }
    strips.push(current);

    strips.retain(|strip| strip.len() >= 2);
    strips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{CameraSample, CameraSamples};
    use approx::assert_relative_eq;

    fn columns_of(samples: Vec<CameraSample>) -> QuiverColumns {
        CameraSamples::new(samples).columns()
    }

    #[test]
    fn test_default_config() {
        let config = QuiverConfig::default();
        assert_eq!(config.half_extent, 2.0);
        assert_eq!(config.arrow_length, 1.0);
        assert_eq!(
            config.axis_labels,
            ["X-axis Label", "Y-axis Label", "Z-axis Label"].map(String::from)
        );
        assert!(!config.show_scatter);
        assert!(!config.show_path);
    }

    #[test]
    fn test_bounds_fixed_regardless_of_data() -> Result<(), QuiverError> {
        let far = columns_of(vec![
            CameraSample::new([100.0, -50.0, 7.0], [1.0, 0.0, 0.0]),
            CameraSample::new([0.1, 0.2, 0.3], [0.0, 0.0, 1.0]),
        ]);
        let near = columns_of(vec![CameraSample::new([0.0; 3], [0.0, 0.0, 1.0])]);
        let empty = QuiverColumns::default();

        for columns in [far, near, empty] {
            let scene = QuiverScene::build(&columns, &QuiverConfig::default())?;
            assert_eq!(scene.bounds().min, [-2.0, -2.0, -2.0]);
            assert_eq!(scene.bounds().max, [2.0, 2.0, 2.0]);
            assert_eq!(scene.bounds().center(), [0.0, 0.0, 0.0]);
            assert_eq!(scene.bounds().half_sizes(), [2.0, 2.0, 2.0]);
        }
        Ok(())
    }

    #[test]
    fn test_empty_scene() -> Result<(), QuiverError> {
        let scene = QuiverScene::build(&QuiverColumns::default(), &QuiverConfig::default())?;
        assert!(scene.arrows().is_empty());
        assert_eq!(scene.num_clipped(), 0);
        assert_eq!(scene.axis_labels()[2], "Z-axis Label");
        assert!(scene.scatter().is_none());
        assert!(scene.path().is_none());
        Ok(())
    }

    #[test]
    fn test_arrows_have_unit_length() -> Result<(), QuiverError> {
        let columns = columns_of(vec![
            CameraSample::new([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]),
            CameraSample::new([1.0, 1.0, 1.0], [0.0, 0.0, -0.25]),
            CameraSample::new([-1.0, 0.5, 0.0], [1.0, 1.0, 1.0]),
        ]);
        let scene = QuiverScene::build(&columns, &QuiverConfig::default())?;

        assert_eq!(scene.arrows().len(), 3);
        for arrow in scene.arrows() {
            let norm = arrow.vector.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
        }

        let first = scene.arrows()[0];
        assert_relative_eq!(first.vector[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(first.vector[1], 0.8, epsilon = 1e-12);
        assert_eq!(scene.arrows()[1].vector, [0.0, 0.0, -1.0]);
        Ok(())
    }

    #[test]
    fn test_arrow_length_config() -> Result<(), QuiverError> {
        let columns = columns_of(vec![CameraSample::new([0.0; 3], [0.0, 2.0, 0.0])]);
        let config = QuiverConfig {
            arrow_length: 0.5,
            ..Default::default()
        };
        let scene = QuiverScene::build(&columns, &config)?;
        assert_eq!(scene.arrows()[0].vector, [0.0, 0.5, 0.0]);
        Ok(())
    }

    #[test]
    fn test_zero_direction() -> Result<(), QuiverError> {
        let columns = columns_of(vec![CameraSample::new([0.5, 0.5, 0.5], [0.0; 3])]);
        let scene = QuiverScene::build(&columns, &QuiverConfig::default())?;
        assert_eq!(scene.arrows().len(), 1);
        assert_eq!(scene.arrows()[0].vector, [0.0; 3]);
        Ok(())
    }

    #[test]
    fn test_clipping() -> Result<(), QuiverError> {
        let columns = columns_of(vec![
            CameraSample::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([2.5, 0.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([2.0, -2.0, 2.0], [1.0, 0.0, 0.0]),
            CameraSample::new([0.0, 0.0, -3.0], [1.0, 0.0, 0.0]),
        ]);
        let scene = QuiverScene::build(&columns, &QuiverConfig::default())?;

        assert_eq!(scene.num_clipped(), 2);
        let indices = scene.arrows().iter().map(|a| a.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 2]);
        Ok(())
    }

    #[test]
    fn test_arrows_keep_sample_order() -> Result<(), QuiverError> {
        let samples = vec![
            CameraSample::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            CameraSample::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            CameraSample::new([0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ];
        let scene = QuiverScene::build(&columns_of(samples.clone()), &QuiverConfig::default())?;

        for (i, (arrow, sample)) in scene.arrows().iter().zip(&samples).enumerate() {
            assert_eq!(arrow.index, i);
            assert_eq!(arrow.origin, sample.position);
            assert_eq!(arrow.vector, sample.direction);
        }
        Ok(())
    }

    #[test]
    fn test_scatter_overlay() -> Result<(), QuiverError> {
        let columns = columns_of(vec![
            CameraSample::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            CameraSample::new([5.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ]);
        let config = QuiverConfig {
            show_scatter: true,
            ..Default::default()
        };
        let scene = QuiverScene::build(&columns, &config)?;
        assert_eq!(scene.scatter(), Some(&[[1.0, 0.0, 0.0]][..]));
        Ok(())
    }

    #[test]
    fn test_path_splits_at_clipped_samples() -> Result<(), QuiverError> {
        let columns = columns_of(vec![
            CameraSample::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([9.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([1.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([9.0, 9.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            CameraSample::new([0.0, 1.0, 1.0], [1.0, 0.0, 0.0]),
        ]);
        let config = QuiverConfig {
            show_path: true,
            ..Default::default()
        };
        let scene = QuiverScene::build(&columns, &config)?;

        let path = scene.path().expect("path overlay enabled");
        assert_eq!(
            path,
            &[
                vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
                vec![[0.0, 1.0, 0.0], [0.0, 1.0, 1.0]],
            ][..]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        let columns = QuiverColumns::default();

        let config = QuiverConfig {
            half_extent: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            QuiverScene::build(&columns, &config),
            Err(QuiverError::InvalidHalfExtent(_))
        ));

        let config = QuiverConfig {
            arrow_length: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            QuiverScene::build(&columns, &config),
            Err(QuiverError::InvalidArrowLength(_))
        ));
    }

    #[test]
    fn test_scale_to_length() {
        assert_eq!(scale_to_length(&[0.0, 0.0, 2.0], 1.0), Some([0.0, 0.0, 1.0]));
        assert_eq!(scale_to_length(&[0.0; 3], 1.0), None);
    }

    #[test]
    fn test_tiny_and_huge_directions() -> Result<(), Box<dyn std::error::Error>> {
        let data = r#"[
            {"cam_pos": [0, 0, 0], "cam_dir": [1e-200, 0, 0]},
            {"cam_pos": [0, 0, 0], "cam_dir": [0, 1e200, 0]},
            {"cam_pos": [0, 0, 0], "cam_dir": [-1e300, 1e300, 0]}
        ]"#;
        let samples = crate::io::json::read_samples_from_reader(data.as_bytes())?;
        let scene = QuiverScene::build(&samples.columns(), &QuiverConfig::default())?;

        assert_eq!(scene.arrows()[0].vector, [1.0, 0.0, 0.0]);
        assert_eq!(scene.arrows()[1].vector, [0.0, 1.0, 0.0]);

        let diagonal = scene.arrows()[2].vector;
        assert_relative_eq!(diagonal[0], -(0.5f64.sqrt()), epsilon = 1e-12);
        assert_relative_eq!(diagonal[1], 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(linalg::norm(&diagonal), 1.0, epsilon = 1e-12);
        Ok(())
    }
}

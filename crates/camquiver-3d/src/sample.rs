use serde::{Deserialize, Serialize};

/// A single camera sample: where the camera was and where it was looking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSample {
    /// Camera position as x, y, z.
    #[serde(rename = "cam_pos")]
    pub position: [f64; 3],
    /// Camera viewing direction as dx, dy, dz.
    #[serde(rename = "cam_dir")]
    pub direction: [f64; 3],
}

impl CameraSample {
    /// Create a new camera sample from a position and a direction.
    pub fn new(position: [f64; 3], direction: [f64; 3]) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// An ordered collection of camera samples.
///
/// The order is the order of the records in the input file and is kept all the
/// way to the rendered arrows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraSamples {
    samples: Vec<CameraSample>,
}

impl CameraSamples {
    /// Create a new collection from a vector of samples.
    pub fn new(samples: Vec<CameraSample>) -> Self {
        Self { samples }
    }

    /// Get the number of samples in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get as reference the samples in the collection.
    pub fn samples(&self) -> &[CameraSample] {
        &self.samples
    }

    /// Split the samples into the six parallel quiver columns.
    pub fn columns(&self) -> QuiverColumns {
        QuiverColumns::from_samples(&self.samples)
    }

    /// Get the component-wise extent of the sample positions.
    ///
    /// Returns `None` for an empty collection.
    pub fn extent(&self) -> Option<SampleExtent> {
        let first = self.samples.first()?.position;
        let (min, max) = self
            .samples
            .iter()
            .fold((first, first), |(mut min, mut max), sample| {
                for i in 0..3 {
                    min[i] = min[i].min(sample.position[i]);
                    max[i] = max[i].max(sample.position[i]);
                }
                (min, max)
            });
        Some(SampleExtent { min, max })
    }
}


/// Axis aligned extent of a set of sample positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleExtent {
    /// Minimum x, y, z over all positions.
    pub min: [f64; 3],
    /// Maximum x, y, z over all positions.
    pub max: [f64; 3],
}

/// Sample positions and directions unpacked into six parallel columns.
///
/// Index `i` of every column belongs to sample `i` of the source collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuiverColumns {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    dx: Vec<f64>,
    dy: Vec<f64>,
    dz: Vec<f64>,
}

impl QuiverColumns {
    /// Unpack a slice of samples into columns, keeping the sample order.
    pub fn from_samples(samples: &[CameraSample]) -> Self {
        let mut columns = Self {
            x: Vec::with_capacity(samples.len()),
            y: Vec::with_capacity(samples.len()),
            z: Vec::with_capacity(samples.len()),
            dx: Vec::with_capacity(samples.len()),
            dy: Vec::with_capacity(samples.len()),
            dz: Vec::with_capacity(samples.len()),
        };

        for sample in samples {
            let [x, y, z] = sample.position;
            let [dx, dy, dz] = sample.direction;

            columns.x.push(x);
            columns.y.push(y);
            columns.z.push(z);

            columns.dx.push(dx);
            columns.dy.push(dy);
            columns.dz.push(dz);
        }

        columns
    }

    /// Get the number of rows, shared by all six columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the columns are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The x position column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y position column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The z position column.
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// The x direction column.
    pub fn dx(&self) -> &[f64] {
        &self.dx
    }

    /// The y direction column.
    pub fn dy(&self) -> &[f64] {
        &self.dy
    }

    /// The z direction column.
    pub fn dz(&self) -> &[f64] {
        &self.dz
    }

    /// Iterate over the rows as `(position, direction)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = ([f64; 3], [f64; 3])> + '_ {
        (0..self.len()).map(move |i| {
            (
                [self.x[i], self.y[i], self.z[i]],
                [self.dx[i], self.dy[i], self.dz[i]],
            )
        })
    }
}

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// I/O utilities for reading and writing camera samples.
pub mod io;

/// Small vector helpers.
pub mod linalg;

/// Orbit camera and spherical coordinates.
pub mod orbit;

/// Quiver scene construction.
pub mod quiver;

/// Camera sample types.
pub mod sample;

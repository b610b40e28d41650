//! Grid sprite sheet packing and atlas generation
//!
//! Icon collections are packed onto uniform grids with a text atlas naming
//! every sprite's rectangle. Existing hand-labeled sheets are translated into
//! the same atlas format by inferring their label convention.

#![forbid(unsafe_code)]

/// Atlas records, serialization and legacy label translation
pub mod atlas;
/// Input/output operations, configuration and error handling
pub mod io;
/// Natural ordering and naming strategies
pub mod naming;
/// Icon collection and grid packing
pub mod packing;

pub use io::error::{PackError, Result};

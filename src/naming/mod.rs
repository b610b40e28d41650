//! Name ordering and derivation for collected icons
//!
//! This module contains naming-related functionality including:
//! - Natural ordering of names with embedded numbers
//! - Strategies turning file names into sprite names

/// Natural ordering where digit runs compare numerically
pub mod natural;
/// Injectable policies deriving sprite names from files
pub mod strategy;

pub use natural::{NaturalKey, natural_cmp, sort_natural};
pub use strategy::NamingStrategy;

//! Grid packing of icon collections into sprite sheets
//!
//! This module contains packing-related functionality including:
//! - Ordered icon collection from source directories
//! - Grid geometry for uniform cells
//! - Canvas compositing with nearest-neighbor resizing

/// Icon discovery and decoding
pub mod collector;
/// Grid dimensions and slot arithmetic
pub mod grid;
/// Canvas compositing and placement records
pub mod sheet;

pub use collector::{CollectMode, IconCollector, IconEntry, IconSource};
pub use grid::GridLayout;
pub use sheet::{PackedSheet, SheetPacker};

//! Atlas records, text serialization and legacy label translation

/// Placement records and header metadata
pub mod entry;
/// Label file classification and record generation for legacy sheets
pub mod legacy;
/// Atlas text rendering
pub mod writer;

pub use entry::{AtlasEntry, AtlasHeader};
pub use legacy::{LabelFormat, LegacyAtlasTranslator, LegacyTranslation};
pub use writer::render_atlas;

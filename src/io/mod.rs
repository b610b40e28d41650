//! Input/output operations, configuration and error handling

/// Command-line parsing and batch orchestration
pub mod cli;
/// Layout and output naming constants
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image decode, encode and copy helpers
pub mod image;
/// Batch manifest and sheet jobs
pub mod manifest;
/// Sequential job runner
pub mod pipeline;
/// Terminal progress display
pub mod progress;

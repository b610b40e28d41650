//! Sheet jobs and the batch manifest passed to the pipeline
//!
//! A manifest names the output directory and every sheet to produce. The
//! standard manifest mirrors the extracted asset layout under a base
//! directory; custom manifests are read from TOML:
//!
//! ```toml
//! output_dir = "output"
//!
//! [[jobs]]
//! kind = "flat"
//! name = "raven-fantasy-16x16"
//! source = "icons/16x16"
//! cell = [16, 16]
//!
//! [[jobs]]
//! kind = "legacy"
//! name = "32rogues-items"
//! image = "32rogues/items.png"
//! labels = "32rogues/items.txt"
//! tile_size = 32
//! ```
//!
//! Relative paths in a manifest file resolve against the file's directory.

use crate::io::configuration::{
    ATLAS_SUFFIX, DEFAULT_LEGACY_TILE_SIZE, IMAGE_EXTENSION, LEGACY_PREFIX, LEGACY_SHEETS,
    LEGACY_SOURCE, OUTPUT_DIR_NAME, PALETTE_SWAP_FILE, RAVEN_RESOLUTIONS, RAVEN_SOURCE,
    RPG_CELL_SIZE, RPG_SOURCE, SHEET_SUFFIX,
};
use crate::io::error::{PackError, Result, file_system};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const fn default_tile_size() -> u32 {
    DEFAULT_LEGACY_TILE_SIZE
}

/// One sheet to produce
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SheetJob {
    /// Pack images found directly in `source`
    Flat {
        /// Output base name
        name: String,
        /// Directory of icons
        source: PathBuf,
        /// Canonical cell size (width, height)
        cell: (u32, u32),
    },
    /// Pack images from the category subdirectories of `source`
    Categorized {
        /// Output base name
        name: String,
        /// Directory of category directories
        source: PathBuf,
        /// Canonical cell size (width, height)
        cell: (u32, u32),
    },
    /// Translate a labeled legacy sheet
    Legacy {
        /// Output base name
        name: String,
        /// Existing sheet image
        image: PathBuf,
        /// Label text file
        labels: PathBuf,
        /// Tile edge length in pixels
        #[serde(default = "default_tile_size")]
        tile_size: u32,
    },
    /// Copy an image to the output directory without an atlas
    Copy {
        /// Output base name
        name: String,
        /// Image to copy
        source: PathBuf,
    },
}

impl SheetJob {
    /// Output base name
    pub fn name(&self) -> &str {
        match self {
            Self::Flat { name, .. }
            | Self::Categorized { name, .. }
            | Self::Legacy { name, .. }
            | Self::Copy { name, .. } => name,
        }
    }

    /// File name of the sheet image this job writes
    pub fn image_file_name(&self) -> String {
        match self {
            Self::Flat { name, .. } | Self::Categorized { name, .. } => {
                format!("{name}{SHEET_SUFFIX}")
            }
            Self::Legacy { name, .. } | Self::Copy { name, .. } => {
                format!("{name}.{IMAGE_EXTENSION}")
            }
        }
    }

    /// File name of the atlas for this job
    ///
    /// Copy jobs never write one.
    pub fn atlas_file_name(&self) -> String {
        format!("{}{ATLAS_SUFFIX}", self.name())
    }

    fn resolve(self, base: &Path) -> Self {
        match self {
            Self::Flat { name, source, cell } => Self::Flat {
                name,
                source: base.join(source),
                cell,
            },
            Self::Categorized { name, source, cell } => Self::Categorized {
                name,
                source: base.join(source),
                cell,
            },
            Self::Legacy {
                name,
                image,
                labels,
                tile_size,
            } => Self::Legacy {
                name,
                image: base.join(image),
                labels: base.join(labels),
                tile_size,
            },
            Self::Copy { name, source } => Self::Copy {
                name,
                source: base.join(source),
            },
        }
    }
}

/// Output directory plus the ordered list of sheets to produce
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Directory receiving every output file
    pub output_dir: PathBuf,
    /// Sheets in processing order
    #[serde(default)]
    pub jobs: Vec<SheetJob>,
}

impl Manifest {
    /// Manifest for the standard extracted asset layout under `base`
    ///
    /// Covers the categorized RPG pack, the Raven pack at each resolution,
    /// the labeled 32rogues sheets and the palette swap copy.
    pub fn standard(base: &Path, legacy_tile_size: u32) -> Self {
        let mut jobs = vec![SheetJob::Categorized {
            name: "pixel-art-rpg".to_string(),
            source: base.join(RPG_SOURCE),
            cell: RPG_CELL_SIZE,
        }];

        let raven_base = base.join(RAVEN_SOURCE);
        jobs.extend(
            RAVEN_RESOLUTIONS
                .iter()
                .map(|&(size_name, edge)| SheetJob::Flat {
                    name: format!("raven-fantasy-{size_name}"),
                    source: raven_base.join(size_name),
                    cell: (edge, edge),
                }),
        );

        let legacy_base = base.join(LEGACY_SOURCE);
        jobs.extend(
            LEGACY_SHEETS
                .iter()
                .map(|&(sheet_name, image, labels)| SheetJob::Legacy {
                    name: format!("{LEGACY_PREFIX}-{sheet_name}"),
                    image: legacy_base.join(image),
                    labels: legacy_base.join(labels),
                    tile_size: legacy_tile_size,
                }),
        );

        jobs.push(SheetJob::Copy {
            name: format!("{LEGACY_PREFIX}-items-palette-swaps"),
            source: legacy_base.join(PALETTE_SWAP_FILE),
        });

        Self {
            output_dir: base.join(OUTPUT_DIR_NAME),
            jobs,
        }
    }

    /// Parse a TOML manifest, resolving relative paths against `base`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid manifest
    pub fn from_toml_str(text: &str, origin: &Path, base: &Path) -> Result<Self> {
        let manifest: Self = toml::from_str(text).map_err(|e| PackError::Manifest {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            output_dir: base.join(manifest.output_dir),
            jobs: manifest
                .jobs
                .into_iter()
                .map(|job| job.resolve(base))
                .collect(),
        })
    }

    /// Read a TOML manifest from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(file_system(path, "read manifest"))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&text, path, base)
    }

    /// Replace the output directory
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Path of an output file
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

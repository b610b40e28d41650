//! Sequential batch runner turning manifest jobs into sheets and atlases
//!
//! Each job is collected, packed or translated, and written before the next
//! one starts. Missing inputs, empty collections and uneven legacy sheets skip
//! only their own job; any other failure stops the batch. Outputs are
//! overwritten on every run.

use crate::atlas::entry::AtlasHeader;
use crate::atlas::legacy::{LabelFormat, LegacyAtlasTranslator, TileGrid};
use crate::atlas::writer::render_atlas;
use crate::io::error::{PackError, Result, file_system};
use crate::io::image::{copy_sheet, image_size, save_sheet, write_text};
use crate::io::manifest::{Manifest, SheetJob};
use crate::packing::collector::IconCollector;
use crate::packing::grid::GridLayout;
use crate::packing::sheet::SheetPacker;
use std::path::{Path, PathBuf};

/// What happened to one job
#[derive(Debug)]
pub enum SheetOutcome {
    /// Icons were packed into a new sheet
    Packed {
        /// Sheet image written
        image_path: PathBuf,
        /// Atlas written
        atlas_path: PathBuf,
        /// Grid the icons were placed on
        layout: GridLayout,
        /// Icons placed
        icons: usize,
    },
    /// A legacy sheet was copied and its labels translated
    Translated {
        /// Sheet image written
        image_path: PathBuf,
        /// Atlas written
        atlas_path: PathBuf,
        /// Tile grid of the sheet
        grid: TileGrid,
        /// Convention the label file was read under
        format: LabelFormat,
        /// Records written
        entries: usize,
        /// Label lines that produced no records
        dropped_lines: usize,
        /// Rows not covered by any plain label
        unassigned_rows: u32,
    },
    /// An image was copied without an atlas
    Copied {
        /// Image written
        image_path: PathBuf,
        /// Bytes copied
        bytes: u64,
    },
    /// The job was skipped; the batch continued
    Skipped {
        /// Why the job could not run
        reason: PackError,
    },
}

/// Runs every job of a manifest in order
#[derive(Debug, Clone)]
pub struct Pipeline {
    manifest: Manifest,
}

impl Pipeline {
    /// Create a pipeline for a manifest
    pub const fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// Manifest being run
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Run all jobs, returning one outcome per job
    ///
    /// # Errors
    ///
    /// Returns the first error that is not a per-sheet skip
    pub fn run(&self) -> Result<Vec<SheetOutcome>> {
        self.manifest
            .jobs
            .iter()
            .map(|job| self.run_job(job))
            .collect()
    }

    /// Run a single job, converting per-sheet failures into a skip
    ///
    /// # Errors
    ///
    /// Returns an error if reading, encoding or writing fails for reasons other
    /// than a missing or unusable input
    pub fn run_job(&self, job: &SheetJob) -> Result<SheetOutcome> {
        let result = match job {
            SheetJob::Flat { source, cell, .. } => {
                self.pack(job, IconCollector::flat(), source, *cell)
            }
            SheetJob::Categorized { source, cell, .. } => {
                self.pack(job, IconCollector::categorized(), source, *cell)
            }
            SheetJob::Legacy {
                image,
                labels,
                tile_size,
                ..
            } => self.translate(job, image, labels, *tile_size),
            SheetJob::Copy { source, .. } => self.copy(job, source),
        };

        match result {
            Err(reason) if reason.is_skippable() => Ok(SheetOutcome::Skipped { reason }),
            other => other,
        }
    }

    fn pack(
        &self,
        job: &SheetJob,
        collector: IconCollector,
        source: &Path,
        cell: (u32, u32),
    ) -> Result<SheetOutcome> {
        require(source)?;
        let packer = SheetPacker::new(cell)?;

        let icons = collector.collect(source)?;
        if icons.is_empty() {
            return Err(PackError::EmptyCollection {
                path: source.to_path_buf(),
            });
        }

        let packed = packer.pack(&icons)?;
        let image_name = job.image_file_name();
        let image_path = self.manifest.output_path(&image_name);
        let atlas_path = self.atlas_path(job);

        let header = AtlasHeader {
            image_name,
            sheet_size: packed.canvas.dimensions(),
            cell_size: packer.cell(),
        };

        save_sheet(&packed.canvas, &image_path)?;
        write_text(&render_atlas(&header, &packed.entries), &atlas_path)?;

        Ok(SheetOutcome::Packed {
            image_path,
            atlas_path,
            layout: packed.layout,
            icons: packed.entries.len(),
        })
    }

    fn translate(
        &self,
        job: &SheetJob,
        image: &Path,
        labels: &Path,
        tile_size: u32,
    ) -> Result<SheetOutcome> {
        require(image)?;
        require(labels)?;

        let sheet_size = image_size(image)?;
        let translator = LegacyAtlasTranslator::new(sheet_size, tile_size)?;
        let text = std::fs::read_to_string(labels).map_err(file_system(labels, "read labels"))?;
        let translation = translator.translate(&text);

        let image_name = job.image_file_name();
        let image_path = self.manifest.output_path(&image_name);
        let atlas_path = self.atlas_path(job);

        let header = AtlasHeader {
            image_name,
            sheet_size,
            cell_size: (tile_size, tile_size),
        };

        copy_sheet(image, &image_path)?;
        write_text(&render_atlas(&header, &translation.entries), &atlas_path)?;

        Ok(SheetOutcome::Translated {
            image_path,
            atlas_path,
            grid: translator.grid(),
            format: translation.format,
            entries: translation.entries.len(),
            dropped_lines: translation.dropped_lines,
            unassigned_rows: translation.unassigned_rows,
        })
    }

    fn copy(&self, job: &SheetJob, source: &Path) -> Result<SheetOutcome> {
        require(source)?;

        let image_path = self.manifest.output_path(&job.image_file_name());
        let bytes = copy_sheet(source, &image_path)?;

        Ok(SheetOutcome::Copied { image_path, bytes })
    }

    fn atlas_path(&self, job: &SheetJob) -> PathBuf {
        self.manifest.output_path(&job.atlas_file_name())
    }
}

fn require(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PackError::MissingInput {
            path: path.to_path_buf(),
        })
    }
}

/// Files in a directory with their sizes in bytes, sorted by name
///
/// # Errors
///
/// Returns an error if the directory or an entry's metadata cannot be read
pub fn list_outputs(dir: &Path) -> Result<Vec<(String, u64)>> {
    let entries = std::fs::read_dir(dir).map_err(file_system(dir, "read directory"))?;

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(file_system(dir, "read directory entry"))?;
        let metadata = entry
            .metadata()
            .map_err(file_system(entry.path(), "read metadata"))?;
        if metadata.is_file() {
            listed.push((
                entry.file_name().to_string_lossy().into_owned(),
                metadata.len(),
            ));
        }
    }
    listed.sort();
    Ok(listed)
}

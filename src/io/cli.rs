//! Command-line interface for batch sheet generation

use crate::io::configuration::DEFAULT_LEGACY_TILE_SIZE;
use crate::io::error::{Result, file_system};
use crate::io::manifest::{Manifest, SheetJob};
use crate::io::pipeline::{Pipeline, SheetOutcome, list_outputs};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spritepack")]
#[command(
    author,
    version,
    about = "Pack icon directories into sprite sheets with atlas files"
)]
/// Command-line arguments for the sheet generation tool
pub struct Cli {
    /// Base directory holding the extracted asset packs
    #[arg(value_name = "BASE", default_value = ".")]
    pub base: PathBuf,

    /// Output directory (defaults to <BASE>/output, or the manifest's)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML manifest listing the sheets to build instead of the standard layout
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Tile size of the legacy sheets in the standard layout
    #[arg(short, long, default_value_t = DEFAULT_LEGACY_TILE_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the manifest selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a manifest file was given and cannot be loaded
    pub fn manifest(&self) -> Result<Manifest> {
        let manifest = match &self.manifest {
            Some(path) => Manifest::from_toml_file(path)?,
            None => Manifest::standard(&self.base, self.tile_size),
        };

        Ok(match &self.output {
            Some(output) => manifest.with_output_dir(output.clone()),
            None => manifest,
        })
    }
}

/// Orchestrates a batch run with progress and per-sheet diagnostics
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Produce every sheet named by the manifest
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded, the output directory
    /// cannot be created, or a sheet fails for a reason other than a skip
    pub fn process(&self) -> Result<Vec<SheetOutcome>> {
        let pipeline = Pipeline::new(self.cli.manifest()?);
        let output_dir = pipeline.manifest().output_dir.clone();
        std::fs::create_dir_all(&output_dir)
            .map_err(file_system(&output_dir, "create directory"))?;

        let jobs = &pipeline.manifest().jobs;
        if let Some(ref pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut outcomes = Vec::with_capacity(jobs.len());
        for job in jobs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_sheet(job.name());
            }

            let outcome = pipeline.run_job(job)?;
            self.report(&describe(job, &outcome));

            if let Some(ref pm) = self.progress_manager {
                pm.complete_sheet();
            }
            outcomes.push(outcome);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.report(&format!(
                "Done! {} sheets processed. Outputs in {}",
                pm.completed(),
                output_dir.display()
            ));
            pm.finish();
        }

        let listing = list_outputs(&output_dir)?
            .into_iter()
            .map(|(file_name, bytes)| format!("  {file_name} ({bytes} bytes)"))
            .collect::<Vec<_>>();
        self.report(&listing);

        Ok(outcomes)
    }

    fn report(&self, lines: &[String]) {
        if let Some(ref pm) = self.progress_manager {
            for line in lines {
                pm.report(line);
            }
        }
    }
}

/// Human-readable lines describing a job's outcome
pub fn describe(job: &SheetJob, outcome: &SheetOutcome) -> Vec<String> {
    let name = job.name();
    match outcome {
        SheetOutcome::Packed {
            image_path,
            atlas_path,
            layout,
            icons,
        } => {
            let (width, height) = layout.canvas_size();
            vec![
                format!(
                    "{name}: {icons} icons → {}x{} grid → {width}x{height}px sheet",
                    layout.cols, layout.rows
                ),
                format!("  Saved: {}", image_path.display()),
                format!("  Atlas: {}", atlas_path.display()),
            ]
        }
        SheetOutcome::Translated {
            image_path,
            atlas_path,
            grid,
            format,
            entries,
            dropped_lines,
            unassigned_rows,
        } => {
            let (width, height) = grid.sheet_size();
            let mut lines = vec![
                format!(
                    "{name}: {width}x{height} → {}x{} grid ({format:?} labels)",
                    grid.cols, grid.rows
                ),
                format!("  Saved: {}", image_path.display()),
                format!("  Atlas: {} ({entries} entries)", atlas_path.display()),
            ];
            if *dropped_lines > 0 {
                lines.push(format!("  Dropped {dropped_lines} label lines"));
            }
            if *unassigned_rows > 0 {
                lines.push(format!("  {unassigned_rows} rows left without a label"));
            }
            lines
        }
        SheetOutcome::Copied { image_path, bytes } => vec![format!(
            "{name}: copied {} ({bytes} bytes, no atlas)",
            image_path.display()
        )],
        SheetOutcome::Skipped { reason } => vec![format!("Skipping {name}: {reason}")],
    }
}

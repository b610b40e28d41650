//! Tests for command-line parsing, manifest selection and outcome reporting

#[cfg(test)]
mod tests {
    use clap::Parser;
    use spritepack::PackError;
    use spritepack::atlas::legacy::{LabelFormat, TileGrid};
    use spritepack::io::cli::{BatchProcessor, Cli, describe};
    use spritepack::io::configuration::DEFAULT_LEGACY_TILE_SIZE;
    use spritepack::io::manifest::SheetJob;
    use spritepack::io::pipeline::SheetOutcome;
    use spritepack::packing::GridLayout;
    use std::path::PathBuf;

    fn legacy_job() -> SheetJob {
        SheetJob::Legacy {
            name: "32rogues-tiles".to_string(),
            image: "tiles.png".into(),
            labels: "tiles.txt".into(),
            tile_size: 32,
        }
    }

    // Tests parsing with no arguments uses the current directory and defaults
    // Verified by changing default values
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["spritepack"]);

        assert_eq!(cli.base, PathBuf::from("."));
        assert_eq!(cli.tile_size, DEFAULT_LEGACY_TILE_SIZE);
        assert!(cli.output.is_none());
        assert!(cli.manifest.is_none());
        assert!(cli.should_show_progress());
    }

    // Tests long and short flags
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "spritepack", "sprites", "-o", "build", "-t", "16", "-q", "--manifest", "jobs.toml",
        ]);

        assert_eq!(cli.base, PathBuf::from("sprites"));
        assert_eq!(cli.output, Some(PathBuf::from("build")));
        assert_eq!(cli.manifest, Some(PathBuf::from("jobs.toml")));
        assert_eq!(cli.tile_size, 16);
        assert!(!cli.should_show_progress());
    }

    // Tests the standard manifest honours the output override and tile size
    // Verified by ignoring the --output flag
    #[test]
    fn test_cli_standard_manifest() {
        let cli = Cli::parse_from(["spritepack", "sprites", "--output", "build", "-t", "16"]);
        let manifest = cli.manifest().expect("standard manifest");

        assert_eq!(manifest.output_dir, PathBuf::from("build"));
        assert_eq!(manifest.jobs.len(), 12);
        assert!(
            manifest
                .jobs
                .iter()
                .all(|job| !matches!(job, SheetJob::Legacy { tile_size, .. } if *tile_size != 16))
        );
    }

    // Tests a missing manifest file is a fatal error
    // Verified by falling back to the standard layout
    #[test]
    fn test_cli_missing_manifest() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let manifest = temp_dir.path().join("absent.toml");
        let cli = Cli::parse_from([
            "spritepack".into(),
            "--manifest".into(),
            manifest.into_os_string(),
        ]);

        let processor = BatchProcessor::new(cli);
        assert!(processor.process().is_err());
    }

    // Tests a quiet run over an empty base creates the output and skips every sheet
    // Verified by aborting the batch on the first missing input
    #[test]
    fn test_process_empty_base() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = Cli::parse_from([
            "spritepack".into(),
            temp_dir.path().as_os_str().to_owned(),
            "--quiet".into(),
        ]);

        let outcomes = BatchProcessor::new(cli).process().expect("batch runs");

        assert_eq!(outcomes.len(), 12);
        assert!(
            outcomes
                .iter()
                .all(|outcome| matches!(outcome, SheetOutcome::Skipped { .. }))
        );
        assert!(temp_dir.path().join("output").is_dir());
    }

    // Tests packed and translated outcomes describe their geometry
    // Verified by omitting the grid size from the summary
    #[test]
    fn test_describe_outcomes() {
        let packed = SheetOutcome::Packed {
            image_path: "out/rpg-spritesheet.png".into(),
            atlas_path: "out/rpg-atlas.txt".into(),
            layout: GridLayout::for_count(107, (32, 32)),
            icons: 107,
        };
        let job = SheetJob::Categorized {
            name: "rpg".to_string(),
            source: "rpg".into(),
            cell: (32, 32),
        };
        let lines = describe(&job, &packed);
        assert_eq!(lines[0], "rpg: 107 icons → 11x10 grid → 352x320px sheet");

        let translated = SheetOutcome::Translated {
            image_path: "out/32rogues-tiles.png".into(),
            atlas_path: "out/32rogues-tiles-atlas.txt".into(),
            grid: TileGrid::new((544, 800), 32).expect("even sheet"),
            format: LabelFormat::GridRef,
            entries: 120,
            dropped_lines: 4,
            unassigned_rows: 0,
        };
        let lines = describe(&legacy_job(), &translated);
        assert!(lines[0].contains("17x25 grid"));
        assert!(lines.iter().any(|line| line.contains("120 entries")));
        assert!(lines.iter().any(|line| line.contains("Dropped 4 label lines")));
        assert!(!lines.iter().any(|line| line.contains("without a label")));

        let skipped = SheetOutcome::Skipped {
            reason: PackError::MissingInput {
                path: "tiles.txt".into(),
            },
        };
        assert_eq!(
            describe(&legacy_job(), &skipped),
            vec!["Skipping 32rogues-tiles: Missing input 'tiles.txt'".to_string()]
        );
    }
}

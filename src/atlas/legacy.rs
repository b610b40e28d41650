//! Translation of hand-labeled legacy spritesheets into atlas records
//!
//! A legacy sheet is a grid of square tiles shipped with a free-form label
//! file. The file follows one of three undeclared conventions, resolved once
//! per file in priority order:
//!
//! 1. [`LabelFormat::GridRef`]: `3.b. short sword` names the tile on 1-based
//!    row 3, column `b` (0-based letter index). The dot after the letter is
//!    optional.
//! 2. [`LabelFormat::RowLabel`]: `2. water` names an animation filling every
//!    column of 1-based row 2.
//! 3. [`LabelFormat::PlainLabel`]: bare labels splitting the sheet rows into
//!    equal contiguous blocks, in file order.
//!
//! Lines that do not fit the resolved convention produce no records. Rows left
//! over after dividing the sheet among plain labels are not assigned to any
//! label. Both losses are counted on the returned [`LegacyTranslation`].

use crate::atlas::entry::AtlasEntry;
use crate::io::error::{PackError, Result, invalid_parameter};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Label convention of a legacy label file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// `<row>.<col-letter>[.] <label>` references a single tile
    GridRef,
    /// `<row>. <label>` names every tile of one row as animation frames
    RowLabel,
    /// Bare labels dividing the rows evenly
    PlainLabel,
}

impl LabelFormat {
    /// Resolve the convention of a whole label file
    ///
    /// A single grid reference anywhere makes the file [`Self::GridRef`];
    /// otherwise a single row label makes it [`Self::RowLabel`].
    pub fn detect<S: AsRef<str>>(lines: &[S]) -> Self {
        if lines.iter().any(|line| parse_grid_ref(line.as_ref()).is_some()) {
            Self::GridRef
        } else if lines
            .iter()
            .any(|line| parse_row_label(line.as_ref()).is_some())
        {
            Self::RowLabel
        } else {
            Self::PlainLabel
        }
    }
}

/// A parsed `<row>.<col-letter>[.] <label>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRef<'a> {
    /// Row number as written (1-based)
    pub row_number: u32,
    /// Column index from the letter (`a` is 0)
    pub col: u32,
    /// Label text
    pub label: &'a str,
}

/// A parsed `<row>. <label>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLabel<'a> {
    /// Row number as written (1-based)
    pub row_number: u32,
    /// Animation name
    pub label: &'a str,
}

// Whole-line shapes; a label needs at least one non-space character
static GRID_REF_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([a-z])\.?\s+(.*\S)\s*$").ok());
static ROW_LABEL_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.*\S)\s*$").ok());

/// Parse a grid reference line
pub fn parse_grid_ref(line: &str) -> Option<GridRef<'_>> {
    let captures = GRID_REF_LINE.as_ref()?.captures(line)?;
    let letter = captures.get(2)?.as_str().chars().next()?;

    Some(GridRef {
        row_number: row_number(&captures)?,
        col: u32::from(letter) - u32::from('a'),
        label: captures.get(3)?.as_str(),
    })
}

/// Parse a row label line
pub fn parse_row_label(line: &str) -> Option<RowLabel<'_>> {
    let captures = ROW_LABEL_LINE.as_ref()?.captures(line)?;

    Some(RowLabel {
        row_number: row_number(&captures)?,
        label: captures.get(2)?.as_str(),
    })
}

// Rows too large for u32 make the line unparseable
fn row_number(captures: &Captures<'_>) -> Option<u32> {
    captures.get(1)?.as_str().parse().ok()
}

/// Trimmed, non-empty lines of a label file
pub fn label_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Tile grid of a legacy sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Tile columns
    pub cols: u32,
    /// Tile rows
    pub rows: u32,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl TileGrid {
    /// Derive the tile grid of a sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero or either sheet dimension is
    /// not a whole number of tiles
    pub fn new(sheet_size: (u32, u32), tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"tile size must be positive",
            ));
        }
        if sheet_size.0 % tile_size != 0 || sheet_size.1 % tile_size != 0 {
            return Err(PackError::UnevenTiles {
                sheet_size,
                tile_size,
            });
        }

        Ok(Self {
            cols: sheet_size.0 / tile_size,
            rows: sheet_size.1 / tile_size,
            tile_size,
        })
    }

    /// Sheet size in pixels (width, height)
    pub const fn sheet_size(&self) -> (u32, u32) {
        (self.cols * self.tile_size, self.rows * self.tile_size)
    }

    /// Record for the tile at (col, row)
    fn tile(&self, name: String, col: u32, row: u32) -> AtlasEntry {
        AtlasEntry::new(
            name,
            col * self.tile_size,
            row * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }
}

/// Records derived from one label file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTranslation {
    /// Convention the file was read under
    pub format: LabelFormat,
    /// Records in file order
    pub entries: Vec<AtlasEntry>,
    /// Lines that produced no records
    pub dropped_lines: usize,
    /// Rows left without a label by the plain label division
    pub unassigned_rows: u32,
}

/// Converts label files into atlas records for one sheet geometry
#[derive(Debug, Clone, Copy)]
pub struct LegacyAtlasTranslator {
    grid: TileGrid,
}

impl LegacyAtlasTranslator {
    /// Create a translator for a sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet does not divide into whole tiles
    pub fn new(sheet_size: (u32, u32), tile_size: u32) -> Result<Self> {
        Ok(Self {
            grid: TileGrid::new(sheet_size, tile_size)?,
        })
    }

    /// Tile grid of the sheet
    pub const fn grid(&self) -> TileGrid {
        self.grid
    }

    /// Translate the raw contents of a label file
    pub fn translate(&self, text: &str) -> LegacyTranslation {
        self.translate_lines(&label_lines(text))
    }

    /// Translate already trimmed, non-empty label lines
    pub fn translate_lines(&self, lines: &[&str]) -> LegacyTranslation {
        let format = LabelFormat::detect(lines);
        let mut translation = LegacyTranslation {
            format,
            entries: Vec::new(),
            dropped_lines: 0,
            unassigned_rows: 0,
        };

        match format {
            LabelFormat::GridRef => self.grid_refs(lines, &mut translation),
            LabelFormat::RowLabel => self.row_labels(lines, &mut translation),
            LabelFormat::PlainLabel => self.plain_labels(lines, &mut translation),
        }

        translation
    }

    fn grid_refs(&self, lines: &[&str], out: &mut LegacyTranslation) {
        for line in lines {
            let placed = parse_grid_ref(line).and_then(|grid_ref| {
                let row = self.row_index(grid_ref.row_number)?;
                (grid_ref.col < self.grid.cols)
                    .then(|| self.grid.tile(grid_ref.label.to_string(), grid_ref.col, row))
            });

            match placed {
                Some(entry) => out.entries.push(entry),
                None => out.dropped_lines += 1,
            }
        }
    }

    fn row_labels(&self, lines: &[&str], out: &mut LegacyTranslation) {
        for line in lines {
            let Some((row_label, row)) = parse_row_label(line).and_then(|row_label| {
                self.row_index(row_label.row_number)
                    .map(|row| (row_label, row))
            }) else {
                out.dropped_lines += 1;
                continue;
            };

            for col in 0..self.grid.cols {
                let name = format!("{} [frame {col}]", row_label.label);
                out.entries.push(self.grid.tile(name, col, row));
            }
        }
    }

    fn plain_labels(&self, lines: &[&str], out: &mut LegacyTranslation) {
        let label_count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let rows_per_group = self.grid.rows / label_count.max(1);

        let mut block_start = 0;
        for label in lines {
            if rows_per_group == 0 {
                out.dropped_lines += 1;
                continue;
            }
            for row_offset in 0..rows_per_group {
                for col in 0..self.grid.cols {
                    let name = format!("{label} [row {row_offset}, col {col}]");
                    out.entries
                        .push(self.grid.tile(name, col, block_start + row_offset));
                }
            }
            block_start += rows_per_group;
        }

        out.unassigned_rows = self.grid.rows - block_start;
    }

    // 0-based row for a 1-based row number, if it lies on the sheet
    fn row_index(&self, row_number: u32) -> Option<u32> {
        row_number
            .checked_sub(1)
            .filter(|row| *row < self.grid.rows)
    }
}

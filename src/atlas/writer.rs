//! Atlas text serialization
//!
//! ```text
//! # Sprite Sheet Atlas: <image-filename>
//! # Total sprites: <count>
//! # Sheet size: <W>x<H>
//! # Icon size: <w>x<h>
//! # Format: name\tx\ty\twidth\theight
//! <name>\t<x>\t<y>\t<w>\t<h>
//! ```

use crate::atlas::entry::{AtlasEntry, AtlasHeader};
use std::fmt::Write;

/// Field description written on the last header line
pub const FORMAT_DESCRIPTION: &str = r"name\tx\ty\twidth\theight";

/// Render the atlas text for a sheet
///
/// Every line, the last record included, ends with a single newline.
pub fn render_atlas(header: &AtlasHeader, entries: &[AtlasEntry]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    write_atlas(&mut out, header, entries).ok();
    out
}

/// Write the atlas text for a sheet to any formatter sink
///
/// # Errors
///
/// Propagates errors from the underlying writer
pub fn write_atlas<W: Write>(
    out: &mut W,
    header: &AtlasHeader,
    entries: &[AtlasEntry],
) -> std::fmt::Result {
    let (sheet_w, sheet_h) = header.sheet_size;
    let (cell_w, cell_h) = header.cell_size;

    writeln!(out, "# Sprite Sheet Atlas: {}", header.image_name)?;
    writeln!(out, "# Total sprites: {}", entries.len())?;
    writeln!(out, "# Sheet size: {sheet_w}x{sheet_h}")?;
    writeln!(out, "# Icon size: {cell_w}x{cell_h}")?;
    writeln!(out, "# Format: {FORMAT_DESCRIPTION}")?;

    for entry in entries {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            entry.name, entry.x, entry.y, entry.width, entry.height
        )?;
    }

    Ok(())
}

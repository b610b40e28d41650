//! Compositing icons onto a transparent grid canvas

use crate::atlas::entry::AtlasEntry;
use crate::io::error::{Result, invalid_parameter};
use crate::packing::collector::IconEntry;
use crate::packing::grid::GridLayout;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::borrow::Cow;

/// A composited sheet and the placement of every icon on it
#[derive(Debug, Clone)]
pub struct PackedSheet {
    /// Grid the icons were placed on
    pub layout: GridLayout,
    /// Composited RGBA canvas, transparent outside placed icons
    pub canvas: RgbaImage,
    /// One record per icon, in collection order
    pub entries: Vec<AtlasEntry>,
}

/// Packs icons of a canonical cell size onto a uniform grid
#[derive(Debug, Clone, Copy)]
pub struct SheetPacker {
    cell: (u32, u32),
}

impl SheetPacker {
    /// Create a packer for the given cell size
    ///
    /// # Errors
    ///
    /// Returns an error if either cell dimension is zero
    pub fn new(cell: (u32, u32)) -> Result<Self> {
        if cell.0 == 0 || cell.1 == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &format!("{}x{}", cell.0, cell.1),
                &"cell dimensions must be positive",
            ));
        }
        Ok(Self { cell })
    }

    /// Canonical cell size
    pub const fn cell(&self) -> (u32, u32) {
        self.cell
    }

    /// Place every icon in collection order
    ///
    /// Icons whose size differs from the cell are scaled to it with nearest
    /// neighbor sampling. Each icon overwrites its cell, alpha included.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection holds more icons than a grid can index
    pub fn pack(&self, icons: &[IconEntry]) -> Result<PackedSheet> {
        let count = u32::try_from(icons.len()).map_err(|_overflow| {
            invalid_parameter("icon_count", &icons.len(), &"too many icons for one sheet")
        })?;

        let layout = GridLayout::for_count(count, self.cell);
        debug_assert!(count <= layout.capacity());
        let (width, height) = layout.canvas_size();
        let mut canvas = RgbaImage::new(width, height);
        let mut entries = Vec::with_capacity(icons.len());

        for (index, icon) in (0..count).zip(icons) {
            let (x, y) = layout.origin(index);
            let fitted = self.fit(&icon.image);
            imageops::replace(&mut canvas, &*fitted, i64::from(x), i64::from(y));
            let entry = AtlasEntry::new(icon.name.clone(), x, y, self.cell.0, self.cell.1);
            debug_assert!(entry.fits_within((width, height)));
            entries.push(entry);
        }

        Ok(PackedSheet {
            layout,
            canvas,
            entries,
        })
    }

    fn fit<'a>(&self, image: &'a RgbaImage) -> Cow<'a, RgbaImage> {
        if image.dimensions() == self.cell {
            Cow::Borrowed(image)
        } else {
            Cow::Owned(imageops::resize(
                image,
                self.cell.0,
                self.cell.1,
                FilterType::Nearest,
            ))
        }
    }
}

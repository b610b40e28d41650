//! Placement records and atlas header metadata

/// One sprite rectangle within a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasEntry {
    /// Sprite name
    pub name: String,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl AtlasEntry {
    /// Create a record
    pub fn new(name: impl Into<String>, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle lies entirely within a sheet of the given size
    ///
    /// A rectangle whose far edge overflows `u32` never fits.
    pub const fn fits_within(&self, sheet_size: (u32, u32)) -> bool {
        let right = match self.x.checked_add(self.width) {
            Some(right) => right,
            None => return false,
        };
        let bottom = match self.y.checked_add(self.height) {
            Some(bottom) => bottom,
            None => return false,
        };
        right <= sheet_size.0 && bottom <= sheet_size.1
    }
}

/// Metadata written above the records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasHeader {
    /// File name of the sheet image the atlas describes
    pub image_name: String,
    /// Sheet size in pixels (width, height)
    pub sheet_size: (u32, u32),
    /// Cell or tile size in pixels (width, height)
    pub cell_size: (u32, u32),
}

//! Square-ish grid geometry for uniform cell packing
//!
//! A collection of `n` icons is laid out on `cols = ceil(sqrt(n))` columns and
//! `rows = ceil(n / cols)` rows. Icon `i` always lands in column `i mod cols`
//! and row `i div cols`; collection order is the only source of placement.

/// Grid dimensions and cell size for one packed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Cell size in pixels (width, height)
    pub cell: (u32, u32),
}

impl GridLayout {
    /// Compute the layout for `count` icons of the given cell size
    ///
    /// An empty collection yields a `0x0` grid.
    pub const fn for_count(count: u32, cell: (u32, u32)) -> Self {
        let cols = ceil_sqrt(count);
        let rows = if cols == 0 { 0 } else { count.div_ceil(cols) };
        Self { cols, rows, cell }
    }

    /// Canvas size in pixels (width, height)
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.cols * self.cell.0, self.rows * self.cell.1)
    }

    /// Grid position (col, row) of the icon at `index`
    pub const fn slot(&self, index: u32) -> (u32, u32) {
        if self.cols == 0 {
            return (0, 0);
        }
        (index % self.cols, index / self.cols)
    }

    /// Top-left pixel origin of the icon at `index`
    pub const fn origin(&self, index: u32) -> (u32, u32) {
        let (col, row) = self.slot(index);
        (col * self.cell.0, row * self.cell.1)
    }

    /// Number of cells on the grid
    pub const fn capacity(&self) -> u32 {
        self.cols * self.rows
    }
}

/// Smallest integer `c` with `c * c >= n`
pub const fn ceil_sqrt(n: u32) -> u32 {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}

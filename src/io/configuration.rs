//! Packing constants and runtime configuration defaults

/// Tile edge length of the legacy 32rogues sheets
pub const DEFAULT_LEGACY_TILE_SIZE: u32 = 32;

/// Cell size of the categorized RPG icon pack
pub const RPG_CELL_SIZE: (u32, u32) = (32, 32);

/// Raven pack resolutions as (directory name, edge length)
pub const RAVEN_RESOLUTIONS: [(&str, u32); 3] = [("16x16", 16), ("32x32", 32), ("64x64", 64)];

/// Legacy sheets shipped with a label file, as (sheet name, image file, label file)
pub const LEGACY_SHEETS: [(&str, &str, &str); 7] = [
    ("items", "items.png", "items.txt"),
    ("monsters", "monsters.png", "monsters.txt"),
    ("animals", "animals.png", "animals.txt"),
    ("rogues", "rogues.png", "rogues.txt"),
    ("tiles", "tiles.png", "tiles.txt"),
    ("animated-tiles", "animated-tiles.png", "animated-tiles.txt"),
    ("autotiles", "autotiles.png", "autotiles.txt"),
];

/// Prefix for every output derived from the legacy sheets
pub const LEGACY_PREFIX: &str = "32rogues";

// Layout relative to the base directory
/// Output directory for sheets and atlases
pub const OUTPUT_DIR_NAME: &str = "output";
/// Categorized RPG pack location
pub const RPG_SOURCE: &str = "extract/pixel-art-rpg";
/// Raven pack location (one subdirectory per resolution)
pub const RAVEN_SOURCE: &str = "extract/raven-fantasy/Free - Raven Fantasy Icons/Separated Files";
/// Legacy sheet location
pub const LEGACY_SOURCE: &str = "extract/32rogues/32rogues";
/// Palette swap sheet copied without an atlas
pub const PALETTE_SWAP_FILE: &str = "items-palette-swaps.png";

// Output settings
/// Extension accepted by the collector and used for sheets
pub const IMAGE_EXTENSION: &str = "png";
/// Suffix for packed sheet images
pub const SHEET_SUFFIX: &str = "-spritesheet.png";
/// Suffix for atlas text files
pub const ATLAS_SUFFIX: &str = "-atlas.txt";

// Progress bar display settings
/// Width of the sheet progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

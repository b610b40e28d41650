//! Ordered icon collection from flat or category-structured directories
//!
//! A missing directory or one without matching files yields an empty
//! collection rather than an error; callers treat empty input as nothing to
//! pack.

use crate::io::configuration::IMAGE_EXTENSION;
use crate::io::error::{Result, file_system};
use crate::io::image::load_rgba;
use crate::naming::{NamingStrategy, sort_natural};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// How icons are laid out under the source directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    /// Images directly inside the source directory
    Flat,
    /// One subdirectory per category, images inside each
    Categorized,
}

/// A discovered icon file and the name it will carry in the atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Atlas name
    pub name: String,
    /// File to decode
    pub path: PathBuf,
}

/// A named, decoded icon ready for packing
#[derive(Debug, Clone)]
pub struct IconEntry {
    /// Atlas name
    pub name: String,
    /// Decoded pixels at their intrinsic size
    pub image: RgbaImage,
}

/// Gathers icons from a directory in a deterministic order
#[derive(Debug, Clone, Copy)]
pub struct IconCollector {
    mode: CollectMode,
    naming: NamingStrategy,
}

impl IconCollector {
    /// Collector for a single flat directory, naming icons by file stem
    pub const fn flat() -> Self {
        Self {
            mode: CollectMode::Flat,
            naming: NamingStrategy::FileStem,
        }
    }

    /// Collector for category subdirectories, naming icons `category/stem`
    pub const fn categorized() -> Self {
        Self {
            mode: CollectMode::Categorized,
            naming: NamingStrategy::Categorized,
        }
    }

    /// Replace the naming strategy
    #[must_use]
    pub const fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    /// List icon files in packing order without decoding them
    ///
    /// # Errors
    ///
    /// Returns an error if an existing directory cannot be read
    pub fn scan(&self, dir: &Path) -> Result<Vec<IconSource>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        match self.mode {
            CollectMode::Flat => self.scan_images(dir, None),
            CollectMode::Categorized => {
                let mut categories: Vec<(String, PathBuf)> = list_dir(dir)?
                    .into_iter()
                    .filter(|(_, path)| path.is_dir())
                    .collect();
                // Plain lexical order; category counts are small
                categories.sort_by(|a, b| a.0.cmp(&b.0));

                let mut sources = Vec::new();
                for (category, path) in &categories {
                    sources.extend(self.scan_images(path, Some(category))?);
                }
                Ok(sources)
            }
        }
    }

    /// List and decode icons in packing order
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be read or an image cannot be decoded
    pub fn collect(&self, dir: &Path) -> Result<Vec<IconEntry>> {
        self.scan(dir)?
            .into_iter()
            .map(|source| {
                Ok(IconEntry {
                    image: load_rgba(&source.path)?,
                    name: source.name,
                })
            })
            .collect()
    }

    fn scan_images(&self, dir: &Path, category: Option<&str>) -> Result<Vec<IconSource>> {
        let mut files: Vec<(String, PathBuf)> = list_dir(dir)?
            .into_iter()
            .filter(|(file_name, path)| has_image_extension(file_name) && path.is_file())
            .collect();
        sort_natural(&mut files, |(file_name, _)| file_name.as_str());

        Ok(files
            .into_iter()
            .map(|(file_name, path)| IconSource {
                name: self.naming.name(&file_name, category),
                path,
            })
            .collect())
    }
}

/// Whether a file name carries the packable image extension, ignoring case
///
/// Matches on the text after the last dot, so a bare `.png` counts.
pub fn has_image_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, extension)| extension.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(file_system(dir, "read directory"))?;

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(file_system(dir, "read directory entry"))?;
        listed.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
    }
    Ok(listed)
}

//! Naming policies applied by the collector

use std::path::Path;

/// Derives the atlas name of an icon from its file name
///
/// The collector hands every strategy the bare file name (with extension)
/// and, in categorized mode, the category directory name.
#[derive(Debug, Clone, Copy, Default)]
pub enum NamingStrategy {
    /// File name without its extension
    #[default]
    FileStem,
    /// `{category}/{stem}`, falling back to the stem outside a category
    Categorized,
    /// Caller-supplied function of the file name
    Custom(fn(&str) -> String),
}

impl NamingStrategy {
    /// Name an icon file, optionally inside a category
    pub fn name(&self, file_name: &str, category: Option<&str>) -> String {
        match self {
            Self::FileStem => file_stem(file_name),
            Self::Categorized => category.map_or_else(
                || file_stem(file_name),
                |category| format!("{category}/{}", file_stem(file_name)),
            ),
            Self::Custom(name_fn) => name_fn(file_name),
        }
    }
}

/// Strip the final extension from a file name
///
/// Leading-dot names such as `.png` are kept whole.
pub fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map_or_else(|| file_name.to_string(), |stem| stem.to_string_lossy().into_owned())
}

/// Controls how catalog files are loaded from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Maximum bytes allowed for a catalog file.
    pub max_file_size: usize,
    /// When false, a catalog path that is a symlink is refused.
    pub allow_symlinks: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024,
            allow_symlinks: false,
        }
    }
}

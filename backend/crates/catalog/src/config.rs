//! Catalog Configuration
//!
//! Limits used when building the category rule table.

/// Default maximum length of a category name (in characters)
pub const DEFAULT_NAME_MAX_LENGTH: usize = 255;

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Maximum category name length (in characters)
    pub name_max_length: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

impl CategoryConfig {
    /// Override the name length limit
    pub fn with_name_max_length(mut self, max: usize) -> Self {
        self.name_max_length = max;
        self
    }
}

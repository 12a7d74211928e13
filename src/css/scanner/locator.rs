use std::path::{Path, PathBuf};
use log::trace;

use crate::utils::file_utils;

/// Maps component names to their CSS module files
#[derive(Debug)]
pub struct ModuleLocator {
    /// Directory the module files live in
    base_path: PathBuf,
}

impl ModuleLocator {
    /// Create a locator for `<base_path>/<name>.module.css`
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Expected module path for a component
    pub fn module_path(&self, component: &str) -> PathBuf {
        self.base_path.join(format!("{}.module.css", component))
    }

    /// Resolve a component to its module file, if one exists
    pub fn locate(&self, component: &str) -> Option<PathBuf> {
        let path = self.module_path(component);
        trace!("Checking module file: {}", path.display());

        if file_utils::is_regular_file(&path) {
            Some(path)
        } else {
            None
        }
    }
}

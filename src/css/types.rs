use std::path::PathBuf;

/// Base directory the helper was written against
pub const DEFAULT_BASE_PATH: &str =
    "/Users/sunnywilson/Documents/projects/dsa-visualiser-3/src/components/Concepts";

/// Components checked by default, in report order
pub const DEFAULT_COMPONENTS: [&str; 8] = [
    "VariablesViz",
    "SharedViz", // stylesheet only, no component
    "ModuleEvolutionViz",
    "WebEvolutionViz",
    "ArraysBasicsViz",
    "NodeEventLoopViz",
    "CompositionViz",
    "BuildToolsEvolutionViz",
];

/// A component whose CSS module was found and counted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    /// Name of the component
    pub component: String,

    /// Path of the `.module.css` file that was read
    pub file_path: PathBuf,

    /// Number of class selector matches in the file
    pub class_count: usize,
}

/// Statistics about a scan run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleScanStats {
    /// Number of component names checked
    pub components_checked: usize,

    /// Number of module files found and read
    pub files_found: usize,

    /// Components without a module file, in list order
    pub missing_components: Vec<String>,

    /// Sum of class selector matches over all files
    pub total_classes: usize,
}

impl ModuleScanStats {
    pub fn record_found(&mut self, report: &ComponentReport) {
        self.components_checked += 1;
        self.files_found += 1;
        self.total_classes += report.class_count;
    }

    pub fn record_missing(&mut self, component: &str) {
        self.components_checked += 1;
        self.missing_components.push(component.to_string());
    }
}

/// Configuration options for module scanning
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory holding the `<Component>.module.css` files
    pub base_path: PathBuf,

    /// Component names to check; order decides report order
    pub components: Vec<String>,
}

impl ScanOptions {
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            components: DEFAULT_COMPONENTS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Result of a module scanning operation
#[derive(Debug, Clone, Default)]
pub struct ModuleScanResult {
    /// Reports for components whose module file exists, in list order
    pub reports: Vec<ComponentReport>,

    /// Statistics about the scanning process
    pub stats: ModuleScanStats,
}

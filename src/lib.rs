pub mod css;
pub mod utils;

// Re-export main types and functions for easier access
pub use css::types::{ComponentReport, ModuleScanResult, ModuleScanStats, ScanOptions};
pub use css::types::{DEFAULT_BASE_PATH, DEFAULT_COMPONENTS};
pub use css::scanner::ModuleScanner;
pub use css::report::ReportWriter;

// Re-export utility functions
pub use utils::file_utils;

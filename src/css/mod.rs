pub mod types;
pub mod scanner;
pub mod report;

// Re-export the main API for easier access
pub use types::{ComponentReport, ModuleScanResult, ModuleScanStats, ScanOptions};
pub use scanner::ModuleScanner;
pub use report::ReportWriter;

mod counter;
mod locator;

use anyhow::Result;
use log::{debug, info};

use crate::css::types::{ComponentReport, ModuleScanResult, ModuleScanStats, ScanOptions};

// Re-export from submodules
pub use counter::SelectorCounter;
pub use locator::ModuleLocator;

/// Scanner that walks the component list and counts selectors per module file
#[derive(Debug)]
pub struct ModuleScanner {
    /// Configuration options for scanning
    options: ScanOptions,

    /// Resolves component names to module files
    locator: ModuleLocator,

    /// Counts class selectors in a module file
    counter: SelectorCounter,
}

impl ModuleScanner {
    /// Create a new module scanner with the given options
    pub fn new(options: ScanOptions) -> Self {
        let locator = ModuleLocator::new(&options.base_path);

        Self {
            options,
            locator,
            counter: SelectorCounter::new(),
        }
    }

    /// Report a single component, or `None` when it has no module file
    pub fn scan_component(&self, component: &str) -> Result<Option<ComponentReport>> {
        let Some(file_path) = self.locator.locate(component) else {
            debug!("No module file for {}, skipping", component);
            return Ok(None);
        };

        let class_count = self.counter.count_file(&file_path)?;

        Ok(Some(ComponentReport {
            component: component.to_string(),
            file_path,
            class_count,
        }))
    }

    /// Scan every component in order, handing each report to `on_report` as
    /// soon as it is produced.
    ///
    /// A read failure stops the scan; reports already handed out stay handed out.
    pub fn scan_each<F>(&self, mut on_report: F) -> Result<ModuleScanStats>
    where
        F: FnMut(&ComponentReport) -> Result<()>,
    {
        let base_path = self.locator.base_path();
        if !base_path.is_dir() {
            info!("Base directory does not exist: {}", base_path.display());
        }

        let mut stats = ModuleScanStats::default();

        for component in &self.options.components {
            match self.scan_component(component)? {
                Some(report) => {
                    stats.record_found(&report);
                    on_report(&report)?;
                }
                None => stats.record_missing(component),
            }
        }

        info!(
            "Scanned {} components: {} module files, {} missing, {} classes",
            stats.components_checked,
            stats.files_found,
            stats.missing_components.len(),
            stats.total_classes
        );

        Ok(stats)
    }

    /// Scan every component and collect the reports
    pub fn scan(&self) -> Result<ModuleScanResult> {
        let mut reports = Vec::with_capacity(self.options.components.len());
        let stats = self.scan_each(|report| {
            reports.push(report.clone());
            Ok(())
        })?;

        Ok(ModuleScanResult { reports, stats })
    }
}

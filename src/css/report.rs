use std::io::Write;
use anyhow::{Context, Result};

use crate::css::types::ComponentReport;

/// Writes component reports as plain text
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the separator, header and count lines for one component
    pub fn write_report(&mut self, report: &ComponentReport) -> Result<()> {
        writeln!(self.out).context("Failed to write report")?;
        writeln!(self.out, "=== {} ===", report.component).context("Failed to write report")?;
        writeln!(self.out, "Classes found: {}", report.class_count)
            .context("Failed to write report")?;
        self.out.flush().context("Failed to flush report output")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn writes_header_and_count() {
        let mut writer = ReportWriter::new(Vec::new());
        writer
            .write_report(&ComponentReport {
                component: "VariablesViz".to_string(),
                file_path: PathBuf::from("VariablesViz.module.css"),
                class_count: 12,
            })
            .unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "\n=== VariablesViz ===\nClasses found: 12\n");
    }
}

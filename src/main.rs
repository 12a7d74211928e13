use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;

use css_module_scanner::{ModuleScanner, ReportWriter, ScanOptions, DEFAULT_BASE_PATH};

/// Count class selectors in the CSS modules of the concept components
#[derive(Parser, Debug)]
#[command(name = "css_module_scanner", version, about)]
struct Args {
    /// Directory containing the `<Component>.module.css` files
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    base_path: PathBuf,

    /// Log scan decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let options = ScanOptions::default().with_base_path(args.base_path);
    debug!("Scanning {} components in {}", options.components.len(), options.base_path.display());

    let scanner = ModuleScanner::new(options);
    let mut writer = ReportWriter::new(io::stdout().lock());

    scanner.scan_each(|report| writer.write_report(report))?;
    Ok(())
}

//! Scan command - find unhandled buttons and print the triage report

use crate::classifier::{self, DEFAULT_RULES};
use crate::reporters;
use crate::scanner::{self, files::collect_source_files, SourceFiles};

use anyhow::Result;
use console::style;
use std::path::Path;
use tracing::info;

pub fn run(root: &Path) -> Result<()> {
    // A missing root yields an empty file list and a zero-finding report.
    let files = collect_source_files(root, &["tsx"])?;
    info!("scanning {} files under {}", files.len(), root.display());

    eprintln!(
        "{}Scanning {} .tsx files under {}",
        style("→ ").dim(),
        style(files.len()).cyan(),
        style(root.display()).dim()
    );

    let file_count = files.len();
    let provider = SourceFiles::new(files);
    let findings = scanner::scan(&provider);
    let report = classifier::partition(findings, &DEFAULT_RULES, file_count);

    print!("{}", reporters::text::render(&report));
    Ok(())
}

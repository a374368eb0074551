// crates/todo_report/src/lib.rs

use anyhow::{Context, Result};

use render_report::{write_report, ReportOutcome};
use scan_annotations::scan_project;
use todo_marker::LINK_CONTENT;
use update_link_block::update_link_document;

pub mod config;

pub use config::AppConfig;

/// Scans the project, writes the report, then links it from the README.
///
/// The README is not touched when the report could not be written.
pub fn run(config: &AppConfig) -> Result<()> {
    let annotations = scan_project(&config.scan);

    let outcome =
        write_report(&config.output_file, &annotations).context("Failed to generate the report")?;
    if let ReportOutcome::Written { lines } = outcome {
        log::info!("  > {} distinct item(s) listed.", lines);
    }

    update_link_document(&config.link_file, LINK_CONTENT)
        .context("Failed to update the report link")?;

    Ok(())
}

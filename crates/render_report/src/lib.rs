// crates/render_report/src/lib.rs

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use todo_marker::{Annotation, MarkerKind};

/// Document written when the scan found nothing.
pub const EMPTY_REPORT: &str = "# No outstanding todos!\n";

/// Separator placed before every section except the first.
const SECTION_SEPARATOR: &str = "\n---\n\n";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Error writing to output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What ended up in the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// No annotations: only the placeholder line was written.
    Empty,
    /// A full report with this many distinct bullet lines.
    Written { lines: usize },
}

/// Section heading for a marker kind.
pub fn heading_text(kind: MarkerKind) -> String {
    match kind {
        MarkerKind::Fixme => "'FIXME's".to_string(),
        MarkerKind::Todocs => "TODOCSes".to_string(),
        other => format!("{}s", other),
    }
}

/// Renders one bullet line.
///
/// ```text
/// - [ ] (src/a.py) - alice: fix this
/// - [ ] (src/a.py) - alice
/// - [ ] alice: fix this
/// - [ ] alice
/// ```
pub fn render_line(annotation: &Annotation) -> String {
    let mut line = String::from("- [ ] ");
    if !annotation.path.is_empty() {
        line.push('(');
        line.push_str(&annotation.path);
        line.push_str(") - ");
    }
    line.push_str(&annotation.label);
    if !annotation.message.is_empty() {
        line.push_str(": ");
        line.push_str(&annotation.message);
    }
    line
}

/// Renders the whole report.
///
/// Every kind gets a heading, even when it has no annotations. A bullet line
/// that was already written anywhere earlier in the document is skipped.
pub fn render_report(annotations: &[Annotation]) -> String {
    render_report_counted(annotations).0
}

/// Renders the report and writes it to `path` in one go, replacing any
/// previous content.
pub fn write_report(path: &Path, annotations: &[Annotation]) -> Result<ReportOutcome, ReportError> {
    let (document, lines) = render_report_counted(annotations);

    fs::write(path, document).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    if annotations.is_empty() {
        log::info!("No outstanding comments found. Created clean report.");
        return Ok(ReportOutcome::Empty);
    }

    log::info!("Report generation success");
    log::info!("  > Full report successfully generated in {}", path.display());
    Ok(ReportOutcome::Written { lines })
}

fn render_report_counted(annotations: &[Annotation]) -> (String, usize) {
    if annotations.is_empty() {
        return (EMPTY_REPORT.to_string(), 0);
    }

    let mut output = String::new();
    let mut processed_lines: HashSet<String> = HashSet::new();

    for (index, kind) in MarkerKind::ALL.iter().enumerate() {
        if index > 0 {
            output.push_str(SECTION_SEPARATOR);
        }
        output.push_str("# ");
        output.push_str(&heading_text(*kind));
        output.push('\n');

        let mut section = annotations.iter().filter(|a| a.kind == *kind).peekable();
        if section.peek().is_none() {
            output.push('\n');
            continue;
        }

        for annotation in section {
            let line = render_line(annotation);
            if processed_lines.contains(&line) {
                continue;
            }
            output.push_str(&line);
            output.push('\n');
            processed_lines.insert(line);
        }
    }

    let lines = processed_lines.len();
    (output, lines)
}

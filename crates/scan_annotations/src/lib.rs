// crates/scan_annotations/src/lib.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use filter_excluded_files::{is_excluded_dir, is_excluded_file};
use once_cell::sync::Lazy;
use regex::Regex;
use todo_marker::{Annotation, MarkerKind};
use walkdir::WalkDir;

/// `KIND(label)` with an optional `: message` tail. Keywords are matched
/// case-insensitively and the label may not contain `)`.
static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    let kinds = MarkerKind::ALL
        .iter()
        .map(|kind| regex::escape(kind.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)({})\s*\(([^)]*)\)(?:\s*:\s*([^\r\n]*))?", kinds)).unwrap()
});

/// What to scan and what to leave alone.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Directory the walk starts from.
    pub root: PathBuf,
    /// Directory that reported paths are made relative to.
    pub cwd: PathBuf,
    /// Directory names pruned from the walk (hidden directories are always pruned).
    pub exclude_dirs: Vec<String>,
    /// File basenames that are never read.
    pub exclude_files: Vec<String>,
}

/// Extracts every annotation on a single line.
///
/// `TODO(alice): fix this` yields `{TODO, "alice", "fix this"}` and
/// `BUG(x)` yields `{BUG, "x", ""}`. Several annotations on one line are
/// returned left to right.
pub fn parse_line(path: &str, line: &str) -> Vec<Annotation> {
    let line = line.trim_end_matches(['\n', '\r']);
    ANNOTATION_RE
        .captures_iter(line)
        .filter_map(|caps| {
            let kind = match caps.get(1)?.as_str().parse::<MarkerKind>() {
                Ok(kind) => kind,
                Err(err) => {
                    log::debug!("{}: {}", path, err);
                    return None;
                }
            };
            let label = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            let message = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
            Some(Annotation {
                path: path.to_string(),
                kind,
                label: label.to_string(),
                message: message.to_string(),
            })
        })
        .collect()
}

/// Walks `config.root` and returns every annotation found, in walk order and
/// then line order. Files that cannot be read are logged and skipped.
pub fn scan_project(config: &ScanConfig) -> Vec<Annotation> {
    let scanner = AnnotationScanner::new(config);
    scanner.scan()
}

// === Private Implementation === //

struct AnnotationScanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> AnnotationScanner<'a> {
    fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    fn scan(&self) -> Vec<Annotation> {
        log::info!("Starting project scan in {}", self.config.root.display());
        let targeted = MarkerKind::ALL
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        log::info!("  > Types targeted: {}", targeted);

        let mut annotations = Vec::new();

        // The root itself is never pruned, even when it is `.`.
        let walker = WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !is_excluded_dir(&entry.file_name().to_string_lossy(), &self.config.exclude_dirs)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Could not read directory entry: {}", err);
                    continue;
                }
            };
            // Follows symlinks so a link to a directory is not opened as a file.
            if entry.path().is_dir() {
                continue;
            }
            if is_excluded_file(entry.path(), &self.config.exclude_files) {
                continue;
            }

            let display_path = relative_to(entry.path(), &self.config.cwd);
            match scan_file(entry.path(), &display_path, &mut annotations) {
                Ok(0) => {}
                Ok(found) => log::debug!("{}: {} annotation(s)", display_path, found),
                Err(err) => {
                    log::warn!("Could not read file: {} ({})", display_path, err);
                }
            }
        }

        log::info!("  > Found {} total comments.", annotations.len());
        annotations
    }
}

/// Reads `path` line by line, appending matches to `out` as they are found.
/// `\n`, `\r\n` and a lone `\r` all end a line. Lines are decoded lossily so
/// invalid UTF-8 never stops the scan.
fn scan_file(path: &Path, display_path: &str, out: &mut Vec<Annotation>) -> io::Result<usize> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut found = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let chunk = String::from_utf8_lossy(&buf);
        for line in chunk.split(['\r', '\n']).filter(|line| !line.is_empty()) {
            let records = parse_line(display_path, line);
            found += records.len();
            out.extend(records);
        }
    }

    Ok(found)
}

/// Path of `path` relative to `cwd`, or the path as walked when it does not
/// live below `cwd`.
fn relative_to(path: &Path, cwd: &Path) -> String {
    let absolute = if path.is_relative() {
        cwd.join(path)
    } else {
        path.to_path_buf()
    };
    match absolute.strip_prefix(cwd) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

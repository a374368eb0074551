// crates/todo_report/src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use filter_excluded_files::invocation_name;
use scan_annotations::ScanConfig;
use todo_marker::{EXCLUDE_DIRS, OUTPUT_FILE, README_FILE};

/// Runtime configuration, built once at start-up and passed down by reference.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub scan: ScanConfig,
    /// Report written on every run.
    pub output_file: PathBuf,
    /// Document whose sentinel block receives the report link.
    pub link_file: PathBuf,
}

impl AppConfig {
    /// Default configuration for the current process: scan the working
    /// directory, write `TODO.md`, link it from `README.md`.
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let arg0 = env::args_os()
            .next()
            .map(|a| a.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::for_dir(cwd, invocation_name(&arg0)))
    }

    /// Configuration rooted at `cwd`. `self_name` is the tool's own file
    /// name, which is never scanned.
    pub fn for_dir(cwd: PathBuf, self_name: Option<String>) -> Self {
        let mut exclude_files = vec![OUTPUT_FILE.to_string(), README_FILE.to_string()];
        exclude_files.extend(self_name);

        Self {
            scan: ScanConfig {
                root: cwd.clone(),
                cwd: cwd.clone(),
                exclude_dirs: EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
                exclude_files,
            },
            output_file: cwd.join(OUTPUT_FILE),
            link_file: cwd.join(README_FILE),
        }
    }
}

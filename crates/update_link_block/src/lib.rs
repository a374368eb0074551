// crates/update_link_block/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use todo_marker::{END_MARKER, START_MARKER};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error(
        "the '{}' file doesn't exist. Please create it and add the markers: '{}' and '{}'",
        .path.display(),
        START_MARKER,
        END_MARKER
    )]
    Missing { path: PathBuf },

    #[error(
        "the '{}' file doesn't have the markers in it yet. Please add the markers: '{}' and '{}'",
        .path.display(),
        START_MARKER,
        END_MARKER
    )]
    MissingSentinels { path: PathBuf },

    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    OutsideBlock,
    InsideBlock,
}

/// True when both sentinel lines are present (compared after trimming).
pub fn has_sentinels(content: &str) -> bool {
    let has_start = content.lines().any(|line| line.trim() == START_MARKER);
    let has_end = content.lines().any(|line| line.trim() == END_MARKER);
    has_start && has_end
}

/// Replaces everything between the sentinels with `link_line`.
///
/// Lines outside the block are copied untouched, line endings included.
/// The sentinel lines themselves are rewritten in their canonical form.
pub fn replace_link_block(content: &str, link_line: &str) -> String {
    let mut output = String::with_capacity(content.len() + link_line.len());
    let mut state = BlockState::OutsideBlock;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed == START_MARKER {
            output.push_str(START_MARKER);
            output.push('\n');
            output.push_str(link_line);
            output.push('\n');
            state = BlockState::InsideBlock;
            continue;
        }
        if trimmed == END_MARKER {
            output.push_str(END_MARKER);
            output.push('\n');
            state = BlockState::OutsideBlock;
            continue;
        }

        match state {
            BlockState::InsideBlock => {}
            BlockState::OutsideBlock => output.push_str(line),
        }
    }

    output
}

/// Rewrites the link block of the document at `path`.
///
/// The file is only written once every precondition holds: it exists, it
/// can be read, and it carries both sentinels.
pub fn update_link_document(path: &Path, link_line: &str) -> Result<(), LinkError> {
    if !path.exists() {
        return Err(LinkError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LinkError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !has_sentinels(&content) {
        return Err(LinkError::MissingSentinels {
            path: path.to_path_buf(),
        });
    }

    let updated = replace_link_block(&content, link_line);
    fs::write(path, updated).map_err(|source| LinkError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("README update success");
    log::info!("  > Successfully updated link within {} markers.", path.display());
    Ok(())
}

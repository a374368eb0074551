// crates/todo_marker/src/lib.rs

//! Marker vocabulary shared by the scanner, the report writer and the
//! README linker.

use std::fmt;
use std::str::FromStr;

/// Report file written on every run.
pub const OUTPUT_FILE: &str = "TODO.md";

/// Document that receives the link to the report.
pub const README_FILE: &str = "README.md";

/// Opening sentinel of the link block (compared after trimming).
pub const START_MARKER: &str = "<!-- TODOS_START -->";

/// Closing sentinel of the link block (compared after trimming).
pub const END_MARKER: &str = "<!-- TODOS_END -->";

/// Line placed between the sentinels.
pub const LINK_CONTENT: &str = "This project also has a [\"todo list \"](TODO.md).";

/// Directory names that are never descended into.
pub const EXCLUDE_DIRS: &[&str] = &[".venv", "node_modules", "dist", ".git", "__pycache__"];

/// Any directory whose name starts with this character is skipped as well.
pub const HIDDEN_PREFIX: char = '.';

/// The annotation keywords, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerKind {
    Todo,
    Fixme,
    Bug,
    Danger,
    Todocs,
}

impl MarkerKind {
    /// Every kind in declaration order. The report sections follow this order.
    pub const ALL: [MarkerKind; 5] = [
        MarkerKind::Todo,
        MarkerKind::Fixme,
        MarkerKind::Bug,
        MarkerKind::Danger,
        MarkerKind::Todocs,
    ];

    /// Uppercase keyword as it appears in source comments.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Todo => "TODO",
            MarkerKind::Fixme => "FIXME",
            MarkerKind::Bug => "BUG",
            MarkerKind::Danger => "DANGER",
            MarkerKind::Todocs => "TODOCS",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a keyword is not one of the known marker kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMarker(pub String);

impl fmt::Display for UnknownMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown marker kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownMarker {}

impl FromStr for MarkerKind {
    type Err = UnknownMarker;

    /// Case-insensitive: `todo`, `Todo` and `TODO` all parse to `Todo`.
    /// Uses full Unicode uppercasing, matching the scanner's `(?i)` pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        MarkerKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| UnknownMarker(s.to_string()))
    }
}

/// One annotation found on one line of one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// Path relative to the working directory; may be empty.
    pub path: String,
    pub kind: MarkerKind,
    /// Text inside the parentheses, trimmed.
    pub label: String,
    /// Text after the colon, trimmed. Empty when there is no colon part.
    pub message: String,
}

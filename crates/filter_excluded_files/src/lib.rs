// crates/filter_excluded_files/src/lib.rs

use std::path::Path;
use todo_marker::HIDDEN_PREFIX;

/// Returns true when a directory with this name must not be descended into.
///
/// A directory is excluded when its name exactly matches one of `exclusions`
/// or when it starts with the hidden prefix (`.`).
///
/// # Arguments
///
/// * `name` - The directory's own name (not its full path).
/// * `exclusions` - Directory names to prune.
pub fn is_excluded_dir(name: &str, exclusions: &[String]) -> bool {
    name.starts_with(HIDDEN_PREFIX) || exclusions.iter().any(|pattern| name == pattern)
}

/// Returns true when the file's basename exactly matches one of `exclusions`.
/// Paths without a basename (e.g. `/` or `..`) are never excluded here.
pub fn is_excluded_file(path: &Path, exclusions: &[String]) -> bool {
    match path.file_name() {
        Some(name) => {
            let basename = name.to_string_lossy();
            exclusions.iter().any(|pattern| basename == pattern.as_str())
        }
        None => false,
    }
}

/// Basename of the running executable, used so the tool never scans itself.
pub fn invocation_name(arg0: &str) -> Option<String> {
    Path::new(arg0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_dir_name_is_excluded() {
        let exclusions = names(&["node_modules", "dist"]);
        assert!(is_excluded_dir("node_modules", &exclusions));
        assert!(is_excluded_dir("dist", &exclusions));
        assert!(!is_excluded_dir("src", &exclusions));
    }

    #[test]
    fn test_hidden_dirs_are_excluded_without_listing() {
        let exclusions: Vec<String> = vec![];
        assert!(is_excluded_dir(".cache", &exclusions));
        assert!(is_excluded_dir(".github", &exclusions));
    }

    #[test]
    fn test_partial_dir_match_not_excluded() {
        let exclusions = names(&["dist"]);
        assert!(!is_excluded_dir("distribution", &exclusions));
        assert!(!is_excluded_dir("my_dist", &exclusions));
    }

    #[test]
    fn test_file_basename_exclusion() {
        let exclusions = names(&["TODO.md", "README.md"]);
        assert!(is_excluded_file(Path::new("./TODO.md"), &exclusions));
        assert!(is_excluded_file(Path::new("docs/README.md"), &exclusions));
        assert!(!is_excluded_file(Path::new("src/main.rs"), &exclusions));
    }

    #[test]
    fn test_file_case_sensitivity() {
        // Expect exclusion to be case sensitive.
        let exclusions = names(&["README.md"]);
        assert!(!is_excluded_file(Path::new("readme.md"), &exclusions));
    }

    #[test]
    fn test_no_basename_never_excluded() {
        let exclusions = names(&[""]);
        assert!(!is_excluded_file(Path::new("/"), &exclusions));
    }

    #[test]
    fn test_invocation_name_strips_directories() {
        assert_eq!(
            invocation_name("/usr/local/bin/todo_report"),
            Some("todo_report".to_string())
        );
        assert_eq!(invocation_name("./todo_report"), Some("todo_report".to_string()));
        assert_eq!(invocation_name(""), None);
    }
}

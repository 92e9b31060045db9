//! Loader for JSON dependency documents.
//!
//! A document is a JSON object whose keys are package names and whose values
//! are arrays of dependency names:
//!
//! ```json
//! {"pkg1": ["pkg2", "pkg3"], "pkg2": ["pkg3"], "pkg3": []}
//! ```
//!
//! Entries are fed into [`GraphStore::add_edge`] in document order.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::graph::GraphStore;

/// Errors that can occur while loading a dependency document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the document from disk.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON object of string arrays.
    #[error("Invalid input format")]
    InvalidInputFormat(#[from] serde_json::Error),
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loads a dependency document from a file path.
///
/// # Arguments
///
/// * `path` - Path to the JSON document
///
/// # Returns
///
/// A `LoadResult` containing the populated `GraphStore` or an error.
pub fn parse_file(path: &Path) -> LoadResult<GraphStore> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read dependency document");
    parse_str(&content)
}

/// Loads a dependency document from a string.
///
/// Anything other than an object mapping strings to arrays of strings is
/// rejected as [`LoadError::InvalidInputFormat`]. If a key appears twice,
/// the later list wins and keeps the earlier position.
///
/// # Example
///
/// ```
/// use deptree::parser::parse_str;
///
/// let store = parse_str(r#"{"pkg1": ["pkg2"], "pkg2": []}"#).unwrap();
/// let packages: Vec<&str> = store.packages().collect();
/// assert_eq!(packages, vec!["pkg1", "pkg2"]);
///
/// assert!(parse_str(r#"{"pkg1": "pkg2"}"#).is_err());
/// ```
pub fn parse_str(content: &str) -> LoadResult<GraphStore> {
    let document: IndexMap<String, Vec<String>> = serde_json::from_str(content)?;
    debug!(packages = document.len(), "parsed dependency document");

    let mut store = GraphStore::with_capacity(document.len());
    store.extend(document);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn expected(pairs: &[(&str, &[&str])]) -> GraphStore {
        let mut store = GraphStore::new();
        for (package, deps) in pairs {
            store.add_edge(*package, deps.iter().copied());
        }
        store
    }

    fn write_document(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_file_diamond() {
        let file = write_document(r#"{"pkg1": ["pkg2", "pkg3"], "pkg2": ["pkg3"], "pkg3": []}"#);

        let store = parse_file(file.path()).unwrap();
        assert_eq!(
            store,
            expected(&[("pkg1", &["pkg2", "pkg3"]), ("pkg2", &["pkg3"]), ("pkg3", &[])])
        );
    }

    #[test]
    fn test_parse_file_cycle() {
        let file = write_document(r#"{"pkg1": ["pkg2"], "pkg2": ["pkg3"], "pkg3": ["pkg1"]}"#);

        let store = parse_file(file.path()).unwrap();
        assert_eq!(
            store,
            expected(&[("pkg1", &["pkg2"]), ("pkg2", &["pkg3"]), ("pkg3", &["pkg1"])])
        );
    }

    #[test]
    fn test_parse_file_all_leaves() {
        let file = write_document(r#"{"pkg1": [], "pkg2": [], "pkg3": []}"#);

        let store = parse_file(file.path()).unwrap();
        assert_eq!(store, expected(&[("pkg1", &[]), ("pkg2", &[]), ("pkg3", &[])]));
    }

    #[test]
    fn test_document_order_does_not_affect_equality() {
        let first = parse_str(r#"{"pkg1": [], "pkg2": [], "pkg3": []}"#).unwrap();
        let second = parse_str(r#"{"pkg3": [], "pkg1": [], "pkg2": []}"#).unwrap();

        assert_eq!(first, second);
        assert_ne!(
            first.packages().collect::<Vec<_>>(),
            second.packages().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let store = parse_str(r#"{"zeta": ["a"], "alpha": [], "mid": ["zeta", "zeta"]}"#).unwrap();

        let packages: Vec<&str> = store.packages().collect();
        assert_eq!(packages, vec!["zeta", "alpha", "mid"]);
        assert_eq!(store.dependencies_of("mid").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_parse_empty_object() {
        let store = parse_str("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_str("{ invalid json }");
        assert!(matches!(result, Err(LoadError::InvalidInputFormat(_))));
    }

    #[test]
    fn test_parse_top_level_not_object() {
        let result = parse_str(r#"["pkg1", "pkg2"]"#);
        assert!(matches!(result, Err(LoadError::InvalidInputFormat(_))));
    }

    #[test]
    fn test_parse_value_not_array() {
        assert!(matches!(
            parse_str(r#"{"pkg1": "pkg2"}"#),
            Err(LoadError::InvalidInputFormat(_))
        ));
        assert!(matches!(
            parse_str(r#"{"pkg1": null}"#),
            Err(LoadError::InvalidInputFormat(_))
        ));
    }

    #[test]
    fn test_parse_array_of_non_strings() {
        let result = parse_str(r#"{"pkg1": ["pkg2", 3]}"#);
        assert!(matches!(result, Err(LoadError::InvalidInputFormat(_))));
    }

    #[test]
    fn test_error_message_does_not_repeat_source() {
        use std::error::Error;

        let err = parse_str(r#"{"a": 1}"#).unwrap_err();
        let source = err.source().map(ToString::to_string).unwrap();

        assert_eq!(err.to_string(), "Invalid input format");
        assert!(source.contains("invalid type"));
        assert!(!err.to_string().contains(&source));
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deps.json");

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("deps.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

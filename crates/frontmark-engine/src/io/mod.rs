use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

use crate::parsing::{Pipeline, nodes::ParsedDoc};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a document into a rope.
pub fn read_source(path: &Path) -> Result<Rope, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Rope::from(text))
}

/// Read and parse a document with `pipeline`.
pub fn read_document(path: &Path, pipeline: &Pipeline) -> Result<(Rope, ParsedDoc), IoError> {
    let rope = read_source(path)?;
    let doc = pipeline.parse(&rope);
    log::debug!(
        "parsed {}: {} nodes, front matter: {}",
        path.display(),
        doc.nodes.len(),
        doc.front_matter().is_some()
    );
    Ok((rope, doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_document_parses_front_matter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "---json\n{\"draft\": true}\n---\nBody\n").unwrap();

        let (rope, doc) = read_document(&path, &Pipeline::default()).unwrap();
        assert_eq!(rope.len(), 33);
        assert_eq!(
            doc.front_matter().map(|fm| fm.raw_content()),
            Some(r#"{"draft": true}"#)
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        let err = read_document(&path, &Pipeline::default()).unwrap_err();
        assert!(matches!(err, IoError::NotFound(p) if p == path));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, IoError::Io { .. }));
    }
}

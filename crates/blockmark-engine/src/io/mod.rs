use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a file of canonical text and parse it.
pub fn read_document(path: &Path) -> Result<Document, DocumentError> {
    Ok(Document::parse(&read_text(path)?))
}

/// Serialize a document and write it as canonical text.
pub fn write_document(path: &Path, document: &Document) -> Result<(), DocumentError> {
    write_text(path, &document.serialize())
}

/// Read a document from its JSON interchange form.
pub fn read_json(path: &Path) -> Result<Document, DocumentError> {
    Document::from_json(&read_text(path)?)
}

/// Write a document in its JSON interchange form.
pub fn write_json(path: &Path, document: &Document, pretty: bool) -> Result<(), DocumentError> {
    write_text(path, &document.to_json(pretty)?)
}

pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(DocumentError::Io)
}

pub fn write_text(path: &Path, content: &str) -> Result<(), DocumentError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(DocumentError::Io)?;
    }

    log::debug!("writing {} byte(s) to {}", content.len(), path.display());
    fs::write(path, content).map_err(DocumentError::Io)
}

//! Scion export loading.
//!
//! # Responsibility
//! - Read an `.sgx` file and build a `ScionDocument` from its element tree.
//!
//! # Invariants
//! - The whole document is parsed before any caller sees it.
//! - An unreadable source file is an error, never an empty document.
//! - Leaf text reaches the model verbatim, surrounding whitespace included.
//! - Unknown elements, attributes and inline markup are skipped, not rejected.

mod build;
mod tree;

use crate::model::document::ScionDocument;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug)]
pub enum DocumentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Xml(quick_xml::Error),
    /// Input ended while `element` was still open.
    Truncated {
        element: String,
    },
    MissingRoot,
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Xml(err) => write!(f, "malformed Scion document: {err}"),
            Self::Truncated { element } => {
                write!(f, "malformed Scion document: `{element}` is never closed")
            }
            Self::MissingRoot => write!(f, "malformed Scion document: no root element"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Xml(err) => Some(err),
            Self::Truncated { .. } | Self::MissingRoot => None,
        }
    }
}

impl From<quick_xml::Error> for DocumentError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Xml(value)
    }
}

/// Reads and parses a Scion export file.
///
/// # Side effects
/// - Emits `document_load` logging events with duration and status.
///
/// # Errors
/// - `DocumentError::Io` when the file cannot be opened or read.
/// - `DocumentError::Xml` when the content is not a well-formed document.
pub fn load_document(path: impl AsRef<Path>) -> DocumentResult<ScionDocument> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=document_load module=reader status=start path={}",
        path.display()
    );

    let text = std::fs::read_to_string(path).map_err(|source| {
        error!(
            "event=document_load module=reader status=error duration_ms={} error_code=source_open_failed error={}",
            started_at.elapsed().as_millis(),
            source
        );
        DocumentError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match parse_document(&text) {
        Ok(document) => {
            info!(
                "event=document_load module=reader status=ok duration_ms={} bytes={}",
                started_at.elapsed().as_millis(),
                text.len()
            );
            Ok(document)
        }
        Err(err) => {
            error!(
                "event=document_load module=reader status=error duration_ms={} error_code=parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Parses Scion export XML already held in memory.
pub fn parse_document(xml: &str) -> DocumentResult<ScionDocument> {
    let root = tree::parse_tree(xml)?;
    Ok(build::build_document(&root))
}

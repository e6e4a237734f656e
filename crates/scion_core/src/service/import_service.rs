//! Import use-case service.
//!
//! # Responsibility
//! - Walk a parsed Scion document in the fixed entity order.
//! - Map each record and hand it to the configured `EntitySink`.
//! - Emit a per-record audit trail and a final import report.
//!
//! # Invariants
//! - Order: notes, sources, people, families, children, attachments
//!   (personal then family), names, facts (personal then family).
//! - The first failed write aborts the run; nothing after it is attempted.
//! - The service never bypasses the sink's persistence contract.

use crate::mapper::{
    map_attachment, map_child, map_fact, map_family, map_name, map_note, map_person, map_source,
    null_if_empty,
};
use crate::model::date::{normalize_date, CompositeDate};
use crate::model::document::{Header, ScionDocument};
use crate::model::row::{EntityKind, EntityRow};
use crate::reader::{load_document, DocumentError};
use crate::repo::upsert_repo::EntitySink;
use crate::repo::RepoError;
use log::{debug, error, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Debug)]
pub enum ImportError {
    Document(DocumentError),
    Write {
        kind: EntityKind,
        id: String,
        source: RepoError,
    },
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document(err) => write!(f, "{err}"),
            Self::Write { kind, id, source } => {
                write!(f, "failed to write {kind} `{id}`: {source}")
            }
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Document(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<DocumentError> for ImportError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

/// Export metadata captured from the document header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSummary {
    pub version: Option<String>,
    pub db_info: Option<String>,
    pub created: CompositeDate,
    pub researcher: Option<String>,
    /// `PeopleCount` when it parses as a count.
    pub declared_people: Option<usize>,
    /// `FamilyCount` when it parses as a count.
    pub declared_families: Option<usize>,
}

impl HeaderSummary {
    pub fn from_header(header: &Header) -> Self {
        let created = &header.created;
        Self {
            version: null_if_empty(&created.version),
            db_info: null_if_empty(&created.db_info),
            created: normalize_date(&created.date),
            researcher: null_if_empty(&header.researcher.contact.simple_name),
            declared_people: created.people_count.trim().parse().ok(),
            declared_families: created.family_count.trim().parse().ok(),
        }
    }
}

/// Outcome of one completed import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    header: HeaderSummary,
    counts: BTreeMap<EntityKind, usize>,
}

impl ImportReport {
    fn new(header: HeaderSummary) -> Self {
        Self {
            header,
            counts: BTreeMap::new(),
        }
    }

    fn record(&mut self, kind: EntityKind) {
        *self.counts.entry(kind).or_default() += 1;
    }

    /// Rows written for `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Rows written across all kinds.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn header(&self) -> &HeaderSummary {
        &self.header
    }
}

/// Drives a document import through an `EntitySink`.
pub struct ImportService<S: EntitySink> {
    sink: S,
}

impl<S: EntitySink> ImportService<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Borrow of the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Loads `path` and imports it.
    ///
    /// A source that cannot be opened or parsed aborts before any write.
    pub fn import_file(&self, path: impl AsRef<Path>) -> ImportResult<ImportReport> {
        let document = load_document(path)?;
        self.import_document(&document)
    }

    /// Imports every record of an already parsed document.
    ///
    /// # Errors
    /// - `ImportError::Write` for the first record the sink rejects.
    pub fn import_document(&self, document: &ScionDocument) -> ImportResult<ImportReport> {
        let started_at = Instant::now();
        let header = HeaderSummary::from_header(&document.header);
        info!(
            "event=import module=service status=start version={} db_info={} researcher={}",
            header.version.as_deref().unwrap_or("-"),
            header.db_info.as_deref().unwrap_or("-"),
            header.researcher.as_deref().unwrap_or("-")
        );
        check_declared_count("people", header.declared_people, document.people.items.len());
        check_declared_count(
            "families",
            header.declared_families,
            document.families.items.len(),
        );

        let mut report = ImportReport::new(header);
        self.write_all(&mut report, document.notes.items.iter().map(map_note))?;
        self.write_all(&mut report, document.sources.items.iter().map(map_source))?;
        self.write_all(&mut report, document.people.items.iter().map(map_person))?;
        self.write_all(&mut report, document.families.items.iter().map(map_family))?;
        self.write_all(&mut report, document.children.items.iter().map(map_child))?;
        self.write_all(
            &mut report,
            document
                .personal_attachments
                .items
                .iter()
                .chain(document.family_attachments.items.iter())
                .map(map_attachment),
        )?;
        self.write_all(&mut report, document.names.items.iter().map(map_name))?;
        self.write_all(
            &mut report,
            document
                .personal_facts
                .items
                .iter()
                .chain(document.family_facts.items.iter())
                .map(map_fact),
        )?;

        info!(
            "event=import module=service status=ok duration_ms={} rows={}",
            started_at.elapsed().as_millis(),
            report.total()
        );
        Ok(report)
    }

    fn write_all<R>(
        &self,
        report: &mut ImportReport,
        rows: impl IntoIterator<Item = R>,
    ) -> ImportResult<()>
    where
        R: Into<EntityRow>,
    {
        for row in rows {
            let row: EntityRow = row.into();
            self.write(&row)?;
            report.record(row.kind());
        }
        Ok(())
    }

    fn write(&self, row: &EntityRow) -> ImportResult<()> {
        info!(
            "event=record_import module=service entity={} id={}",
            row.kind(),
            row.id()
        );
        debug!("event=record_import module=service row={row:?}");

        self.sink.persist(row).map_err(|source| {
            error!(
                "event=record_import module=service status=error entity={} id={} error={}",
                row.kind(),
                row.id(),
                source
            );
            ImportError::Write {
                kind: row.kind(),
                id: row.id().to_string(),
                source,
            }
        })
    }
}

fn check_declared_count(collection: &str, declared: Option<usize>, parsed: usize) {
    if let Some(declared) = declared {
        if declared != parsed {
            warn!(
                "event=header_count_mismatch module=service collection={} declared={} parsed={}",
                collection, declared, parsed
            );
        }
    }
}

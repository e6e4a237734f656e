//! Core import logic for Scion PC genealogy exports.
//! Maps the export document onto flat relational rows and upserts them.

pub mod db;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod reader;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{normalize_date, CompositeDate, DateValue};
pub use model::document::ScionDocument;
pub use model::row::{EntityKind, EntityRow};
pub use reader::{load_document, parse_document, DocumentError, DocumentResult};
pub use repo::date_encoding::{DateEncoding, DateFormat};
pub use repo::upsert_repo::{EntitySink, SqliteUpsertWriter};
pub use repo::{RepoError, RepoResult};
pub use service::import_service::{
    HeaderSummary, ImportError, ImportReport, ImportResult, ImportService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

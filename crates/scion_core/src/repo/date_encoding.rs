//! Storage encodings for `CompositeDate`.
//!
//! # Responsibility
//! - Serialize composite dates into the text stored in `date` columns.
//! - Keep the storage format swappable per target store.
//!
//! # Invariants
//! - `Composite` reproduces the existing tuple shape
//!   `(type,"(0,0,y,m,d)","(0,0,y,m,d)",0)` byte for byte.
//! - `Composite` writes an absent endpoint as `"(0,0,0,0,0)"`.
//! - `Json` keeps absent endpoints as `null`, distinct from an all-zero date.

use crate::model::date::{CompositeDate, DateValue};
use crate::repo::{RepoError, RepoResult};

const ABSENT_ENDPOINT: &str = "(0,0,0,0,0)";

/// Serializer for the `date` column.
pub trait DateEncoding {
    /// Stable format name used in logs.
    fn name(&self) -> &'static str;
    fn encode(&self, date: &CompositeDate) -> RepoResult<String>;
}

/// Selects which `DateEncoding` a writer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// Composite tuple text compatible with existing Scion stores.
    #[default]
    Composite,
    /// JSON object with nullable endpoints.
    Json,
}

impl DateFormat {
    pub fn encoding(self) -> Box<dyn DateEncoding> {
        match self {
            Self::Composite => Box::new(CompositeTupleEncoding),
            Self::Json => Box::new(JsonDateEncoding),
        }
    }
}

/// Tuple text `(type, startDate, endDate, reserved)`, each endpoint a
/// quoted 5-tuple `(reserved, reserved, year, month, day)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeTupleEncoding;

impl CompositeTupleEncoding {
    fn endpoint(value: Option<&DateValue>) -> String {
        match value {
            Some(value) => format!("(0,0,{},{},{})", value.year, value.month, value.day),
            None => ABSENT_ENDPOINT.to_string(),
        }
    }
}

impl DateEncoding for CompositeTupleEncoding {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn encode(&self, date: &CompositeDate) -> RepoResult<String> {
        Ok(format!(
            "({},\"{}\",\"{}\",0)",
            date.kind,
            Self::endpoint(date.start.as_ref()),
            Self::endpoint(date.end.as_ref())
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDateEncoding;

impl DateEncoding for JsonDateEncoding {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, date: &CompositeDate) -> RepoResult<String> {
        serde_json::to_string(date)
            .map_err(|err| RepoError::Encoding(format!("failed to encode date as json: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::DateFormat;

    #[test]
    fn each_format_selects_its_encoding() {
        assert_eq!(DateFormat::Composite.encoding().name(), "composite");
        assert_eq!(DateFormat::Json.encoding().name(), "json");
    }

    #[test]
    fn default_format_is_composite() {
        assert_eq!(DateFormat::default(), DateFormat::Composite);
        assert_eq!(DateFormat::default().encoding().name(), "composite");
    }
}

//! Normalized, storage-ready rows.
//!
//! # Responsibility
//! - Define one flat row shape per imported entity.
//! - Tag rows with their entity kind so sinks can route them to a table.
//!
//! # Invariants
//! - `id` is the externally assigned primary key and is never rewritten.
//! - `None` means SQL `NULL`; empty strings never appear in optional fields.
//! - Reference fields are soft and may name rows that do not exist.

use crate::model::date::CompositeDate;
use std::fmt::{Display, Formatter};

/// Imported entity type. Declaration order is the import order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Note,
    Source,
    Person,
    Family,
    Child,
    Attachment,
    Name,
    Fact,
}

impl EntityKind {
    /// All kinds in import order.
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Note,
        EntityKind::Source,
        EntityKind::Person,
        EntityKind::Family,
        EntityKind::Child,
        EntityKind::Attachment,
        EntityKind::Name,
        EntityKind::Fact,
    ];

    /// Stable lowercase label used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Source => "source",
            Self::Person => "person",
            Self::Family => "family",
            Self::Child => "child",
            Self::Attachment => "attachment",
            Self::Name => "name",
            Self::Fact => "fact",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub id: String,
    pub detail: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub id: String,
    pub user_id: Option<String>,
    pub birth_sex: Option<String>,
    pub is_private: bool,
    pub note_id: Option<String>,
    pub source_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRow {
    pub id: String,
    pub user_id: Option<String>,
    pub prime_id: Option<String>,
    pub partner_id: Option<String>,
    pub note_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRow {
    pub id: String,
    pub person_id: Option<String>,
    pub family_id: Option<String>,
    pub parent1_id: Option<String>,
    pub parent1_relation: Option<String>,
    pub parent2_id: Option<String>,
    pub parent2_relation: Option<String>,
    pub ordinal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRow {
    pub id: String,
    /// Person or family owning the attachment.
    pub reference_id: Option<String>,
    pub filename: Option<String>,
    pub file_info: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRow {
    pub id: String,
    pub kind: Option<String>,
    pub is_preferred: bool,
    pub person_id: Option<String>,
    pub given: Option<String>,
    pub surname: Option<String>,
    pub familiar: Option<String>,
    pub title: Option<String>,
    pub display_as: Option<String>,
    pub date: CompositeDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRow {
    pub id: String,
    pub kind: Option<String>,
    /// Person for personal facts, family for family facts.
    pub reference_id: Option<String>,
    pub place: Option<String>,
    pub date: CompositeDate,
    pub detail: Option<String>,
    pub note_id: Option<String>,
}

/// Any normalized row, ready for an `EntitySink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRow {
    Note(NoteRow),
    Source(SourceRow),
    Person(PersonRow),
    Family(FamilyRow),
    Child(ChildRow),
    Attachment(AttachmentRow),
    Name(NameRow),
    Fact(FactRow),
}

impl EntityRow {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Note(_) => EntityKind::Note,
            Self::Source(_) => EntityKind::Source,
            Self::Person(_) => EntityKind::Person,
            Self::Family(_) => EntityKind::Family,
            Self::Child(_) => EntityKind::Child,
            Self::Attachment(_) => EntityKind::Attachment,
            Self::Name(_) => EntityKind::Name,
            Self::Fact(_) => EntityKind::Fact,
        }
    }

    /// Primary key of the wrapped row.
    pub fn id(&self) -> &str {
        match self {
            Self::Note(row) => &row.id,
            Self::Source(row) => &row.id,
            Self::Person(row) => &row.id,
            Self::Family(row) => &row.id,
            Self::Child(row) => &row.id,
            Self::Attachment(row) => &row.id,
            Self::Name(row) => &row.id,
            Self::Fact(row) => &row.id,
        }
    }
}

macro_rules! impl_from_row {
    ($($row:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$row> for EntityRow {
                fn from(value: $row) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_row!(
    NoteRow => Note,
    SourceRow => Source,
    PersonRow => Person,
    FamilyRow => Family,
    ChildRow => Child,
    AttachmentRow => Attachment,
    NameRow => Name,
    FactRow => Fact,
);

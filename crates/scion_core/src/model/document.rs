//! Raw Scion PC export document model.
//!
//! # Responsibility
//! - Mirror the `ScionPC` XML element tree one struct per element shape.
//! - Keep every leaf as raw text so coercion stays with the entity mapper.
//!
//! # Invariants
//! - Leaf values are never coerced: `""`, `"0"` and `"false"` stay distinct.
//! - Missing elements and attributes read as empty strings/collections.
//! - Unknown XML content is ignored.

/// Root `ScionPC` element of an `.sgx` export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScionDocument {
    pub header: Header,
    pub names: NameList,
    pub personal_facts: FactList,
    pub family_facts: FactList,
    pub people: PersonList,
    pub families: FamilyList,
    pub children: ChildList,
    pub notes: NoteList,
    pub sources: SourceList,
    pub personal_attachments: AttachmentList,
    pub family_attachments: AttachmentList,
}

/// Export metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub created: Created,
    pub researcher: Researcher,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Created {
    pub date: RawDate,
    pub version: String,
    pub db_info: String,
    pub copyright: String,
    /// Declared person count, raw text.
    pub people_count: String,
    /// Declared family count, raw text.
    pub family_count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Researcher {
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub simple_name: String,
    pub address_lines: Vec<AddressLine>,
    pub email: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressLine {
    pub line_num: String,
    pub text: String,
}

/// Element whose only payload is an `ID` attribute pointing at another record.
///
/// An empty or missing `ID` means "no reference".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Raw `Date` element: a type label plus optional start/end date values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDate {
    pub kind: String,
    pub start: RawDateEndpoint,
    pub end: RawDateEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDateEndpoint {
    pub value: RawDateVal,
}

/// Date components exactly as exported; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDateVal {
    /// Qualifier such as "about" or "before". Kept for reference, not stored.
    pub modifier: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl RawDateVal {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            modifier: String::new(),
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    pub items: Vec<Name>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    pub id: String,
    pub kind: String,
    pub is_preferred: String,
    pub person_id: Reference,
    pub given: String,
    pub surname: String,
    pub familiar: String,
    pub date: RawDate,
    pub title: String,
    pub display_as: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactList {
    pub items: Vec<Fact>,
}

/// Event attached to a person (personal fact) or a family (family fact).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fact {
    pub id: String,
    pub kind: String,
    pub reference_id: Reference,
    pub place: String,
    pub date: RawDate,
    pub detail: String,
    pub note_id: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonList {
    pub items: Vec<Person>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub user_id: String,
    pub birth_sex: String,
    pub note_id: Reference,
    /// `"True"` when the person is marked private.
    pub is_private: String,
    pub source_id: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyList {
    pub items: Vec<Family>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    pub id: String,
    pub user_id: String,
    pub prime_id: Reference,
    pub partner_id: Reference,
    pub note_id: Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildList {
    pub items: Vec<Child>,
}

/// Links a person into a family with per-parent relationship types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Child {
    pub id: String,
    pub person_id: Reference,
    pub family_id: Reference,
    pub parent1: ParentRelation,
    pub parent2: ParentRelation,
    pub ordinal: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRelation {
    pub relationship: Relationship,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationship {
    pub parent_id: String,
    /// Free-form relation label, e.g. "Birth" or "Adopted".
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteList {
    pub items: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    pub items: Vec<Source>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub detail: String,
    pub title: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentList {
    pub items: Vec<Attachment>,
}

/// File attachment on a person or family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    pub reference_id: Reference,
    pub filename: String,
    pub file_info: String,
    pub detail: String,
}

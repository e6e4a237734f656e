//! Entity mapper: raw document records to normalized rows.
//!
//! # Responsibility
//! - Provide one pure transform per entity type.
//! - Apply the null-if-empty rule and boolean literal coercion uniformly.
//!
//! # Invariants
//! - Mapping is total: no function here can fail.
//! - Mapping is local to one record; no cross-entity lookups.
//! - Every non-key text field maps `""` to `None` and anything else verbatim.
//! - Preference flags match the literal `"true"`, privacy flags `"True"`.

use crate::model::date::normalize_date;
use crate::model::document::{Attachment, Child, Fact, Family, Name, Note, Person, Source};
use crate::model::row::{
    AttachmentRow, ChildRow, FactRow, FamilyRow, NameRow, NoteRow, PersonRow, SourceRow,
};

/// Literal the export uses for a set `IsPreferred` flag.
pub const PREFERRED_TRUE_LITERAL: &str = "true";
/// Literal the export uses for a set `IsPrivate` flag.
pub const PRIVATE_TRUE_LITERAL: &str = "True";

/// Maps an empty string to `None`, anything else to an owned copy.
pub fn null_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn flag(value: &str, true_literal: &str) -> bool {
    value == true_literal
}

pub fn map_note(note: &Note) -> NoteRow {
    NoteRow {
        id: note.id.clone(),
        detail: null_if_empty(&note.detail),
    }
}

pub fn map_source(source: &Source) -> SourceRow {
    SourceRow {
        id: source.id.clone(),
        detail: null_if_empty(&source.detail),
        title: null_if_empty(&source.title),
        location: null_if_empty(&source.location),
    }
}

pub fn map_person(person: &Person) -> PersonRow {
    PersonRow {
        id: person.id.clone(),
        user_id: null_if_empty(&person.user_id),
        birth_sex: null_if_empty(&person.birth_sex),
        is_private: flag(&person.is_private, PRIVATE_TRUE_LITERAL),
        note_id: null_if_empty(&person.note_id.id),
        source_id: null_if_empty(&person.source_id.id),
    }
}

pub fn map_family(family: &Family) -> FamilyRow {
    FamilyRow {
        id: family.id.clone(),
        user_id: null_if_empty(&family.user_id),
        prime_id: null_if_empty(&family.prime_id.id),
        partner_id: null_if_empty(&family.partner_id.id),
        note_id: null_if_empty(&family.note_id.id),
    }
}

pub fn map_child(child: &Child) -> ChildRow {
    let parent1 = &child.parent1.relationship;
    let parent2 = &child.parent2.relationship;
    ChildRow {
        id: child.id.clone(),
        person_id: null_if_empty(&child.person_id.id),
        family_id: null_if_empty(&child.family_id.id),
        parent1_id: null_if_empty(&parent1.parent_id),
        parent1_relation: null_if_empty(&parent1.kind),
        parent2_id: null_if_empty(&parent2.parent_id),
        parent2_relation: null_if_empty(&parent2.kind),
        ordinal: null_if_empty(&child.ordinal),
    }
}

pub fn map_attachment(attachment: &Attachment) -> AttachmentRow {
    AttachmentRow {
        id: attachment.id.clone(),
        reference_id: null_if_empty(&attachment.reference_id.id),
        filename: null_if_empty(&attachment.filename),
        file_info: null_if_empty(&attachment.file_info),
        detail: null_if_empty(&attachment.detail),
    }
}

pub fn map_name(name: &Name) -> NameRow {
    NameRow {
        id: name.id.clone(),
        kind: null_if_empty(&name.kind),
        is_preferred: flag(&name.is_preferred, PREFERRED_TRUE_LITERAL),
        person_id: null_if_empty(&name.person_id.id),
        given: null_if_empty(&name.given),
        surname: null_if_empty(&name.surname),
        familiar: null_if_empty(&name.familiar),
        title: null_if_empty(&name.title),
        display_as: null_if_empty(&name.display_as),
        date: normalize_date(&name.date),
    }
}

pub fn map_fact(fact: &Fact) -> FactRow {
    FactRow {
        id: fact.id.clone(),
        kind: null_if_empty(&fact.kind),
        reference_id: null_if_empty(&fact.reference_id.id),
        place: null_if_empty(&fact.place),
        date: normalize_date(&fact.date),
        detail: null_if_empty(&fact.detail),
        note_id: null_if_empty(&fact.note_id.id),
    }
}

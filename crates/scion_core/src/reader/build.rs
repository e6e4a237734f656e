//! Element tree to `ScionDocument` mapping.
//!
//! Lookups are by exact element and attribute name. Anything not named here
//! is skipped, and a collection element may repeat: `<Notes>` twice yields
//! the notes of both, in document order.

use super::tree::Element;
use crate::model::document::{
    AddressLine, Attachment, AttachmentList, Child, ChildList, Contact, Created, Fact, FactList,
    Family, FamilyList, Header, Name, NameList, Note, NoteList, ParentRelation, Person, PersonList,
    RawDate, RawDateEndpoint, RawDateVal, Reference, Relationship, Researcher, ScionDocument,
    Source, SourceList,
};

pub(crate) fn build_document(root: &Element) -> ScionDocument {
    ScionDocument {
        header: nested(root, "Header", header),
        names: NameList {
            items: list(root, "Names", "Name", name),
        },
        personal_facts: FactList {
            items: list(root, "PersonalFacts", "Fact", fact),
        },
        family_facts: FactList {
            items: list(root, "FamilyFacts", "Fact", fact),
        },
        people: PersonList {
            items: list(root, "People", "Person", person),
        },
        families: FamilyList {
            items: list(root, "Families", "Family", family),
        },
        children: ChildList {
            items: list(root, "Children", "Child", child),
        },
        notes: NoteList {
            items: list(root, "Notes", "Note", note),
        },
        sources: SourceList {
            items: list(root, "Sources", "Source", source),
        },
        personal_attachments: AttachmentList {
            items: list(root, "PersonalAttachments", "Attachment", attachment),
        },
        family_attachments: AttachmentList {
            items: list(root, "FamilyAttachments", "Attachment", attachment),
        },
    }
}

fn list<T>(
    parent: &Element,
    collection: &str,
    item: &str,
    build: fn(&Element) -> T,
) -> Vec<T> {
    parent
        .children(collection)
        .flat_map(|element| element.children(item))
        .map(build)
        .collect()
}

fn nested<T: Default>(parent: &Element, name: &str, build: fn(&Element) -> T) -> T {
    parent.child(name).map(build).unwrap_or_default()
}

fn reference(parent: &Element, name: &str) -> Reference {
    Reference::new(
        parent
            .child(name)
            .map(|element| element.attribute("ID"))
            .unwrap_or_default(),
    )
}

fn header(element: &Element) -> Header {
    Header {
        created: nested(element, "Created", created),
        researcher: nested(element, "Researcher", researcher),
    }
}

fn created(element: &Element) -> Created {
    Created {
        date: nested(element, "Date", raw_date),
        version: element.child_text("Version"),
        db_info: element.child_text("DBInfo"),
        copyright: element.child_text("Copyright"),
        people_count: element.child_text("PeopleCount"),
        family_count: element.child_text("FamilyCount"),
    }
}

fn researcher(element: &Element) -> Researcher {
    Researcher {
        contact: nested(element, "Contact", contact),
    }
}

fn contact(element: &Element) -> Contact {
    Contact {
        simple_name: element.child_text("SimpleName"),
        address_lines: element
            .children("AddressLine")
            .map(|line| AddressLine {
                line_num: line.attribute("LineNum"),
                text: line.text().to_string(),
            })
            .collect(),
        email: element.child_text("Email"),
        url: element.child_text("URL"),
    }
}

fn raw_date(element: &Element) -> RawDate {
    RawDate {
        kind: element.attribute("Type"),
        start: nested(element, "StartDate", endpoint),
        end: nested(element, "EndDate", endpoint),
    }
}

fn endpoint(element: &Element) -> RawDateEndpoint {
    RawDateEndpoint {
        value: nested(element, "DateVal", date_val),
    }
}

fn date_val(element: &Element) -> RawDateVal {
    RawDateVal {
        modifier: element.child_text("Modifier"),
        year: element.child_text("Year"),
        month: element.child_text("Month"),
        day: element.child_text("Day"),
    }
}

fn name(element: &Element) -> Name {
    Name {
        id: element.attribute("ID"),
        kind: element.attribute("Type"),
        is_preferred: element.child_text("IsPreferred"),
        person_id: reference(element, "PersonID"),
        given: element.child_text("Given"),
        surname: element.child_text("Surname"),
        familiar: element.child_text("Familiar"),
        date: nested(element, "Date", raw_date),
        title: element.child_text("Title"),
        display_as: element.child_text("DisplayAs"),
    }
}

fn fact(element: &Element) -> Fact {
    Fact {
        id: element.attribute("ID"),
        kind: element.attribute("Type"),
        reference_id: reference(element, "ReferenceID"),
        place: element.child_text("Place"),
        date: nested(element, "Date", raw_date),
        detail: element.child_text("Detail"),
        note_id: reference(element, "NoteID"),
    }
}

fn person(element: &Element) -> Person {
    Person {
        id: element.attribute("ID"),
        user_id: element.child_text("UserID"),
        birth_sex: element.child_text("BirthSex"),
        note_id: reference(element, "NoteID"),
        is_private: element.child_text("IsPrivate"),
        source_id: reference(element, "SourceID"),
    }
}

fn family(element: &Element) -> Family {
    Family {
        id: element.attribute("ID"),
        user_id: element.child_text("UserID"),
        prime_id: reference(element, "PrimeID"),
        partner_id: reference(element, "PartnerID"),
        note_id: reference(element, "NoteID"),
    }
}

fn child(element: &Element) -> Child {
    Child {
        id: element.attribute("ID"),
        person_id: reference(element, "PersonID"),
        family_id: reference(element, "FamilyID"),
        parent1: nested(element, "Parent1Relation", parent_relation),
        parent2: nested(element, "Parent2Relation", parent_relation),
        ordinal: element.child_text("Ordinal"),
    }
}

fn parent_relation(element: &Element) -> ParentRelation {
    ParentRelation {
        relationship: element
            .child("Relationship")
            .map(|relationship| Relationship {
                parent_id: relationship.attribute("ParentID"),
                kind: relationship.attribute("Type"),
            })
            .unwrap_or_default(),
    }
}

fn note(element: &Element) -> Note {
    Note {
        id: element.attribute("ID"),
        detail: element.child_text("Detail"),
    }
}

fn source(element: &Element) -> Source {
    Source {
        id: element.attribute("ID"),
        detail: element.child_text("Detail"),
        title: element.child_text("SourceTitle"),
        location: element.child_text("SourceLocation"),
    }
}

fn attachment(element: &Element) -> Attachment {
    Attachment {
        id: element.attribute("ID"),
        reference_id: reference(element, "ReferenceID"),
        filename: element.child_text("Filename"),
        file_info: element.child_text("Fileinfo"),
        detail: element.child_text("Detail"),
    }
}

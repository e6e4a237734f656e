//! Event-driven XML element tree.
//!
//! # Invariants
//! - Character data is kept verbatim: entities are unescaped, nothing is trimmed.
//! - An element's text is its own character data only. Nested markup becomes
//!   a child element and its text never leaks into the parent.
//! - Content after the first root element closes is not read.

use super::{DocumentError, DocumentResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            attributes.push((
                String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned(),
                attribute.unescape_value()?.into_owned(),
            ));
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Own character data, exactly as written.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value, or `""` when the attribute is missing.
    pub(crate) fn attribute(&self, name: &str) -> String {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    /// Last child called `name`; a repeated leaf keeps its final value.
    pub(crate) fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().rev().find(|child| child.name == name)
    }

    /// Every child called `name`, in document order.
    pub(crate) fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the last child called `name`, or `""` when there is none.
    pub(crate) fn child_text(&self, name: &str) -> String {
        self.child(name)
            .map(|child| child.text.clone())
            .unwrap_or_default()
    }
}

/// Reads `xml` into a tree rooted at its first element.
///
/// # Errors
/// - `DocumentError::Xml` for syntax errors and mismatched end tags.
/// - `DocumentError::Truncated` when input ends inside an element.
/// - `DocumentError::MissingRoot` when there is no element at all.
pub(crate) fn parse_tree(xml: &str) -> DocumentResult<Element> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);
    let mut open: Vec<Element> = Vec::new();

    loop {
        let closed = match reader.read_event()? {
            Event::Start(start) => {
                open.push(Element::open(&start)?);
                None
            }
            Event::Empty(start) => Some(Element::open(&start)?),
            Event::End(_) => open.pop(),
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
                None
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
                None
            }
            Event::Eof => {
                return Err(match open.pop() {
                    Some(element) => DocumentError::Truncated {
                        element: element.name,
                    },
                    None => DocumentError::MissingRoot,
                });
            }
            _ => None,
        };

        if let Some(element) = closed {
            match open.last_mut() {
                Some(parent) => parent.children.push(element),
                None => return Ok(element),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_tree;
    use crate::reader::DocumentError;

    #[test]
    fn text_is_kept_untrimmed_and_unescaped() {
        let root = parse_tree("<R><A>  x &amp; y  </A><B> </B><C><![CDATA[ <raw> ]]></C></R>")
            .expect("tree should parse");

        assert_eq!(root.child_text("A"), "  x & y  ");
        assert_eq!(root.child_text("B"), " ");
        assert_eq!(root.child_text("C"), " <raw> ");
        assert_eq!(root.child_text("Missing"), "");
    }

    #[test]
    fn nested_markup_stays_out_of_parent_text() {
        let root = parse_tree("<R><Detail>a <b>bold</b> c</Detail></R>").expect("tree should parse");

        let detail = root.child("Detail").expect("detail element");
        assert_eq!(detail.text(), "a  c");
        assert_eq!(detail.child_text("b"), "bold");
    }

    #[test]
    fn repeated_leaf_keeps_last_value() {
        let root = parse_tree("<R><A>1</A><A>2</A></R>").expect("tree should parse");
        assert_eq!(root.child_text("A"), "2");
        assert_eq!(root.children("A").count(), 2);
    }

    #[test]
    fn unclosed_and_empty_input_are_errors() {
        assert!(matches!(
            parse_tree("<R><A>"),
            Err(DocumentError::Truncated { element }) if element == "A"
        ));
        assert!(matches!(
            parse_tree("<?xml version=\"1.0\"?>"),
            Err(DocumentError::MissingRoot)
        ));
    }
}

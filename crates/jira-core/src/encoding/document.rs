//! Read-only XML element tree for decoding SOAP responses.
//!
//! Element and attribute names are stored by local name only; namespace
//! prefixes are dropped since the service never reuses a local name across
//! namespaces inside one message. Namespace declarations are skipped.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::DecodeError;

/// Guard against `href` cycles.
const MAX_HREF_DEPTH: usize = 32;

#[derive(Debug, Default)]
struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<usize>,
    text: String,
}

/// A parsed XML document with an `id` index for multi-reference lookup.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    ids: HashMap<String, usize>,
    root: usize,
}

impl Document {
    /// Parse `xml` into an element tree.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Xml`] for malformed input and
    /// [`DecodeError::EmptyDocument`] if no element is present.
    pub fn parse(xml: &str) -> Result<Self, DecodeError> {
        let mut reader = Reader::from_str(xml);
        let mut elements: Vec<Element> = Vec::new();
        let mut ids = HashMap::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let index = open_element(&mut elements, &mut ids, &stack, &start)?;
                    root.get_or_insert(index);
                    stack.push(index);
                }
                Event::Empty(start) => {
                    let index = open_element(&mut elements, &mut ids, &stack, &start)?;
                    root.get_or_insert(index);
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(text) => {
                    if let Some(&top) = stack.last() {
                        elements[top].text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(&top) = stack.last() {
                        elements[top]
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let root = root.ok_or(DecodeError::EmptyDocument)?;
        Ok(Self {
            elements,
            ids,
            root,
        })
    }

    /// The document element.
    #[must_use]
    pub const fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            index: self.root,
        }
    }

    /// Element carrying `id="<id>"`, if any.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<Node<'_>> {
        self.ids.get(id).map(|&index| Node { doc: self, index })
    }
}

fn open_element(
    elements: &mut Vec<Element>,
    ids: &mut HashMap<String, usize>,
    stack: &[usize],
    start: &BytesStart<'_>,
) -> Result<usize, DecodeError> {
    let index = elements.len();
    let mut element = Element {
        name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
        ..Element::default()
    };

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        if key == "id" {
            ids.insert(value.clone(), index);
        }
        element.attrs.push((key, value));
    }

    if let Some(&parent) = stack.last() {
        elements[parent].children.push(index);
    }
    elements.push(element);
    Ok(index)
}

/// A borrowed handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Node<'a> {
    fn element(&self) -> &'a Element {
        &self.doc.elements[self.index]
    }

    /// Local element name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.element().name
    }

    /// Attribute value by local name.
    #[must_use]
    pub fn attr(&self, local_name: &str) -> Option<&'a str> {
        self.element()
            .attrs
            .iter()
            .find(|(key, _)| key == local_name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated character data directly inside this element.
    #[must_use]
    pub fn text(&self) -> &'a str {
        &self.element().text
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + use<'a> {
        let doc = self.doc;
        self.element()
            .children
            .iter()
            .map(move |&index| Node { doc, index })
    }

    /// First child element with the given local name.
    #[must_use]
    pub fn child(&self, local_name: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.name() == local_name)
    }

    /// First child element.
    #[must_use]
    pub fn first_child(&self) -> Option<Node<'a>> {
        self.children().next()
    }

    /// Whether the element is marked `xsi:nil="true"`.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.attr("nil"), Some("true" | "1"))
    }

    /// Local part of the `xsi:type` attribute, if present.
    #[must_use]
    pub fn xsi_type(&self) -> Option<&'a str> {
        self.attr("type")
            .map(|value| value.rsplit(':').next().unwrap_or(value))
    }

    /// Whether this is a detached multi-reference value (`soapenc:root="0"`).
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.attr("root") == Some("0")
    }

    /// Follow `href="#id"` references to the element holding the value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::DanglingHref`] if a reference has no target or
    /// the chain does not terminate.
    pub fn resolve(self) -> Result<Self, DecodeError> {
        let mut node = self;
        for _ in 0..MAX_HREF_DEPTH {
            let Some(href) = node.attr("href") else {
                return Ok(node);
            };
            let id = href.strip_prefix('#').unwrap_or(href);
            node = self
                .doc
                .by_id(id)
                .ok_or_else(|| DecodeError::DanglingHref(href.to_string()))?;
        }
        Err(DecodeError::DanglingHref(
            self.attr("href").unwrap_or_default().to_string(),
        ))
    }
}

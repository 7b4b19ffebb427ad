//! Minimal owned element tree for analysis reports.
//!
//! Analysis reports are small, so the whole document is read into memory
//! with `quick-xml` and queried afterwards. Text content is dropped; only
//! element names and attributes matter to the extractor.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ExtractError;

#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_start(e: &BytesStart) -> Self {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attributes = e
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = match attr.unescape_value() {
                    Ok(value) => value.into_owned(),
                    Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
                };
                (key, value)
            })
            .collect();

        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First direct child with the given name whose `attr` equals `value`.
    pub fn child_with_attr(&self, name: &str, attr: &str, value: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|c| c.name == name && c.attr(attr) == Some(value))
    }

    /// All elements below this one in document order. Does not yield `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    pub fn first_descendant(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|e| e.name == name)
    }
}

pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, XmlElement>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(element) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(xml: &[u8]) -> Result<XmlElement, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|source| ExtractError::Xml {
            position: reader.buffer_position() as u64,
            source,
        })?;

        match event {
            Event::Start(e) => {
                if open.is_empty() && root.is_some() {
                    return Err(ExtractError::IllFormed(
                        "content after the document element".to_string(),
                    ));
                }
                open.push(XmlElement::from_start(&e));
            }
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e);
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {
                        return Err(ExtractError::IllFormed(
                            "content after the document element".to_string(),
                        ))
                    }
                }
            }
            Event::End(_) => {
                let element = open.pop().ok_or_else(|| {
                    ExtractError::IllFormed("closing tag without an opening tag".to_string())
                })?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(text) if open.is_empty() => {
                if text.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(ExtractError::IllFormed(
                        "text outside the document element".to_string(),
                    ));
                }
            }
            Event::CData(_) if open.is_empty() => {
                return Err(ExtractError::IllFormed(
                    "text outside the document element".to_string(),
                ));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(ExtractError::IllFormed(format!(
            "unexpected end of document inside <{}>",
            unclosed.name
        )));
    }

    root.ok_or_else(|| ExtractError::IllFormed("no element found".to_string()))
}

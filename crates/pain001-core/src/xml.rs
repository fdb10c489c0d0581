//! # XML Serialization Adapter
//!
//! Maps the [`Document`] tree to pain.001 XML text and back using
//! `quick-xml`'s serde integration. Element names, attribute names and
//! element order come from the serde attributes in [`crate::document`];
//! `None` fields are skipped, so unset optional elements are absent rather
//! than empty.
//!
//! Output is UTF-8, starts with an XML declaration and is indented with two
//! spaces. Both directions are pure functions of their input.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::document::Document;
use crate::error::Pain001Error;

/// Declaration line written before the root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const ROOT_ELEMENT: &str = "Document";
const INDENT_SIZE: usize = 2;

/// Render `document` as pain.001 XML.
pub fn to_xml_string(document: &Document) -> Result<String, Pain001Error> {
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some(ROOT_ELEMENT))?;
    serializer.indent(' ', INDENT_SIZE);
    document.serialize(serializer)?;

    let mut out = String::with_capacity(XML_DECLARATION.len() + 1 + body.len() + 1);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&body);
    out.push('\n');
    Ok(out)
}

/// Parse pain.001 XML produced by [`to_xml_string`] back into a tree.
///
/// Elements that the model does not know are ignored.
pub fn from_xml_str(xml: &str) -> Result<Document, Pain001Error> {
    Ok(quick_xml::de::from_str(xml)?)
}

use std::fmt::Write;

use compact_str::CompactString;
use glyphsheet_unicode::Language;

use crate::{AtlasLayout, FontVariant, PackedGeometryTable};

/// The `font.xml` layout document consumed by the renderer.
///
/// Characters are written in table order and indexed positionally through their
/// `uvIndex`; consumers rely on that order.
#[derive(Debug)]
pub struct FontDocument<'a> {
    name: CompactString,
    language: Language,
    table: &'a PackedGeometryTable,
}

impl<'a> FontDocument<'a> {
    pub fn new(name: &str, language: Language, table: &'a PackedGeometryTable) -> Self {
        Self { name: name.into(), language, table }
    }

    /// Number of `<character>` elements the document contains.
    pub fn character_count(&self) -> usize {
        self.table.len()
    }

    /// Serializes the document as indented XML.
    ///
    /// Variants that were never placed are written with zero geometry.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.table.len() * 320);
        xml.push_str("<?xml version=\"1.0\" ?>\n");

        let font_attrs = format!(
            "name=\"{}\" width=\"{}\" language=\"{}\"",
            escape_attr(&self.name),
            AtlasLayout::DECLARED_WIDTH,
            self.language.tag(),
        );

        if self.table.is_empty() {
            let _ = writeln!(xml, "<font {font_attrs}/>");
            return xml;
        }

        let _ = writeln!(xml, "<font {font_attrs}>");
        for (uv_index, record) in self.table.records().iter().enumerate() {
            let _ = writeln!(
                xml,
                "  <character uvIndex=\"{uv_index}\" character=\"{}\" byte=\"{}\" type=\"{}\">",
                escape_attr(record.character.encode_utf8(&mut [0; 4])),
                record.code_point(),
                record.class(),
            );

            for variant in FontVariant::ALL {
                let g = record.geometry_or_default(variant);
                let _ = writeln!(
                    xml,
                    "    <{} x=\"{}\" y=\"{}\" width=\"{}\"/>",
                    variant.element_name(),
                    g.x,
                    g.y,
                    g.width
                );
            }

            xml.push_str("  </character>\n");
        }
        xml.push_str("</font>\n");

        xml
    }
}

fn escape_attr(value: &str) -> CompactString {
    let mut escaped = CompactString::default();
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push(c),
        }
    }
    escaped
}

use scraper::Html;

use crate::dom::{Document, NodeId};

impl Document {
    /// Parses markup with an HTML5 parser. Inline `style` declarations seed
    /// each element's style map.
    pub fn parse_html(markup: &str) -> Self {
        let mut doc = Document::from_tree(Html::parse_document(markup));
        let root = doc.document_element();
        let styled: Vec<(NodeId, String)> = std::iter::once(root)
            .chain(doc.descendants(root))
            .filter_map(|node| doc.attr(node, "style").map(|inline| (node, inline.to_string())))
            .collect();
        for (node, inline) in styled {
            apply_inline_style(&mut doc, node, &inline);
        }
        doc
    }
}

/// Copies `prop: value` declarations of a `style` attribute into the
/// element's style map.
fn apply_inline_style(doc: &mut Document, node: NodeId, inline: &str) {
    for declaration in inline.split(';') {
        if let Some((property, value)) = declaration.split_once(':') {
            let property = property.trim();
            if !property.is_empty() {
                doc.set_style(node, &property.to_ascii_lowercase(), value.trim());
            }
        }
    }
}

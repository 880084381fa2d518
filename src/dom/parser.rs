// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::document::Document;
use super::node::{NodeData, NodeId};
use crate::error::{Error, Result};

/// Parse HTML string into a Document
pub fn parse_html(html: &str) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::HtmlParse(e.to_string()))?;

    let doc = Document::new();
    let root_id = doc.root().id;
    for child in dom.document.children.borrow().iter() {
        import_node(&doc, child, root_id);
    }

    tracing::debug!(nodes = doc.nodes.read().len(), "Parsed HTML document");
    Ok(doc)
}

/// Copy one html5ever node (and its subtree) into our store under `parent_id`
fn import_node(doc: &Document, handle: &Handle, parent_id: NodeId) {
    let mut data = match handle.data {
        RcNodeData::Document | RcNodeData::ProcessingInstruction { .. } => return,
        RcNodeData::Doctype { .. } => NodeData::doctype(),
        RcNodeData::Text { ref contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() && text.len() > 1 {
                // Formatting whitespace between tags
                return;
            }
            NodeData::text(text)
        }
        RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
        RcNodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let mut data = NodeData::element(name.local.to_string());
            for attr in attrs.borrow().iter() {
                data.attributes
                    .insert(attr.name.local.to_string(), attr.value.to_string());
            }
            data
        }
    };

    let node_id = NodeId::new();
    data.parent = Some(parent_id);
    {
        let mut nodes = doc.nodes.write();
        nodes.insert(node_id, data);
        if let Some(parent) = nodes.get_mut(&parent_id) {
            parent.children.push(node_id);
        }
    }

    for child in handle.children.borrow().iter() {
        import_node(doc, child, node_id);
    }
}

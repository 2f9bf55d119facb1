use serde::Deserialize;

use super::{Document, Node, Schema};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Text node at {path} has no `text` field")]
    MissingText { path: String },
    #[error("Document root must be a container node, found `{kind}`")]
    InvalidRoot { kind: String },
}

/// The wire shape of a ProseMirror/TipTap node. `attrs` and `marks` are
/// accepted and ignored since they never change addressing.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Vec<RawNode>,
}

pub(super) fn parse_document(json: &str, schema: &Schema) -> Result<Document, DocumentError> {
    let root: RawNode = serde_json::from_str(json)?;
    if root.kind == "text" || schema.is_break(&root.kind) || schema.is_atom(&root.kind) {
        return Err(DocumentError::InvalidRoot { kind: root.kind });
    }

    let content = convert_children(root.content, schema, &root.kind)?;
    log::debug!(
        "parsed `{}` document with {} top-level nodes",
        root.kind,
        content.len()
    );
    Ok(Document::with_unit(content, schema.position_unit))
}

fn convert_children(
    nodes: Vec<RawNode>,
    schema: &Schema,
    parent_path: &str,
) -> Result<Vec<Node>, DocumentError> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, raw)| convert(raw, schema, format!("{parent_path}/{i}")))
        .collect()
}

fn convert(raw: RawNode, schema: &Schema, path: String) -> Result<Node, DocumentError> {
    if raw.kind == "text" {
        return raw.text.map(Node::Text).ok_or(DocumentError::MissingText { path });
    }
    if schema.is_break(&raw.kind) {
        return Ok(Node::Break);
    }
    if schema.is_atom(&raw.kind) {
        return Ok(Node::Atom(raw.kind));
    }

    let content = convert_children(raw.content, schema, &path)?;
    Ok(Node::element(raw.kind, content))
}

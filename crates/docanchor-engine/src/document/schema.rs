use serde::{Deserialize, Serialize};

use super::PositionUnit;

/// Host schema knowledge needed to address a JSON document.
///
/// JSON alone cannot tell an empty element (two positions) from an atomic
/// leaf (one position), so the leaf node types are named here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Node types that are hard line breaks.
    pub break_nodes: Vec<String>,
    /// Node types that are atomic inline leaves other than breaks.
    pub atom_nodes: Vec<String>,
    /// Unit the host counts text positions in.
    pub position_unit: PositionUnit,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            break_nodes: vec!["hardBreak".to_string(), "hard_break".to_string()],
            atom_nodes: vec![
                "image".to_string(),
                "horizontalRule".to_string(),
                "horizontal_rule".to_string(),
                "mention".to_string(),
            ],
            position_unit: PositionUnit::Char,
        }
    }
}

impl Schema {
    pub fn is_break(&self, kind: &str) -> bool {
        self.break_nodes.iter().any(|k| k == kind)
    }

    pub fn is_atom(&self, kind: &str) -> bool {
        self.atom_nodes.iter().any(|k| k == kind)
    }
}

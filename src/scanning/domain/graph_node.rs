use serde::{Deserialize, Serialize};

/// One component of a dependency graph submitted for scanning.
///
/// Nodes form a tree through `nodes`; cycles are not expected and not
/// detected. Field names follow the scanner's wire format and empty fields
/// are left out of the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Component id in the scanner's notation, e.g. `gav://group:artifact:1.0`
    #[serde(rename = "component_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// File name for a root file, internal path for nested binary components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<GraphNode>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_licenses(mut self, licenses: Vec<String>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_child(mut self, child: GraphNode) -> Self {
        self.nodes.push(child);
        self
    }

    /// Number of nodes in the tree rooted here, including this one
    pub fn node_count(&self) -> usize {
        1 + self.nodes.iter().map(GraphNode::node_count).sum::<usize>()
    }
}

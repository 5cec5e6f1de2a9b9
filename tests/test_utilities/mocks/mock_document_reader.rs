use artifact_scan::prelude::*;
use std::path::Path;

/// Mock DocumentReader serving in-memory documents
#[derive(Default)]
pub struct MockDocumentReader {
    graph: Option<GraphNode>,
    build_info: Option<BuildInfo>,
}

impl MockDocumentReader {
    pub fn with_graph(graph: GraphNode) -> Self {
        Self {
            graph: Some(graph),
            build_info: None,
        }
    }

    pub fn with_build_info(build_info: BuildInfo) -> Self {
        Self {
            graph: None,
            build_info: Some(build_info),
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_graph(&self, path: &Path) -> Result<GraphNode> {
        self.graph
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no graph at {}", path.display()))
    }

    fn read_build_info(&self, path: &Path) -> Result<BuildInfo> {
        self.build_info
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no build info at {}", path.display()))
    }
}

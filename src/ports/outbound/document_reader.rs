use crate::build_info::domain::BuildInfo;
use crate::scanning::domain::GraphNode;
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading input documents
///
/// This port abstracts where dependency graphs and build-info documents come
/// from, so use cases can be tested without touching the file system.
pub trait DocumentReader {
    /// Reads a dependency graph (JSON, scanner wire format)
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or is not a valid graph
    fn read_graph(&self, path: &Path) -> Result<GraphNode>;

    /// Reads a build-info document (JSON)
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or is not valid build info
    fn read_build_info(&self, path: &Path) -> Result<BuildInfo>;
}

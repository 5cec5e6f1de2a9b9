use crate::scanning::domain::ResultInclusion;
use std::path::PathBuf;

/// ScanGraphRequest - Request DTO for the scan use case
///
/// Target selections are kept as given; precedence between them is decided
/// when the domain `ScanRequest` is built.
#[derive(Debug, Clone, Default)]
pub struct ScanGraphRequest {
    /// Path to the dependency graph JSON document
    pub graph_path: PathBuf,
    pub project: Option<String>,
    pub repo_path: Option<String>,
    pub watches: Vec<String>,
    pub include: ResultInclusion,
}

impl ScanGraphRequest {
    pub fn new(graph_path: PathBuf) -> Self {
        Self {
            graph_path,
            ..Self::default()
        }
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn with_repo_path(mut self, repo_path: Option<String>) -> Self {
        self.repo_path = repo_path;
        self
    }

    pub fn with_watches(mut self, watches: Vec<String>) -> Self {
        self.watches = watches;
        self
    }

    pub fn with_include(mut self, include: ResultInclusion) -> Self {
        self.include = include;
        self
    }
}

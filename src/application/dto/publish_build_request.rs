use std::path::PathBuf;

/// PublishBuildRequest - Request DTO for the build-info publish use case
#[derive(Debug, Clone)]
pub struct PublishBuildRequest {
    /// Path to the build-info JSON document
    pub build_info_path: PathBuf,
    pub project: Option<String>,
    /// Present the document instead of sending it
    pub dry_run: bool,
}

impl PublishBuildRequest {
    pub fn new(build_info_path: PathBuf, project: Option<String>, dry_run: bool) -> Self {
        Self {
            build_info_path,
            project: project.filter(|p| !p.trim().is_empty()),
            dry_run,
        }
    }
}

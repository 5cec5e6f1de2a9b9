pub mod build_info;
pub mod sha256_summary;

pub use build_info::{
    Agent, Artifact, BuildInfo, BuildInfoParams, Dependency, Module, PublishedBuildInfo, Vcs,
    BUILD_INFO_STARTED_FORMAT,
};
pub use sha256_summary::Sha256Summary;

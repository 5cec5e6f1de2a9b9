use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timestamp layout the artifact repository expects in `started`
pub const BUILD_INFO_STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Build-info document describing one CI build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub name: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub started: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    /// Link back to the CI job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vcs: Vec<Vcs>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,
}

impl BuildInfo {
    /// Creates a document for `name`/`number` started now
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            started: chrono::Local::now()
                .format(BUILD_INFO_STARTED_FORMAT)
                .to_string(),
            ..Self::default()
        }
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Name and number identify the build; both are required.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation {
                message: "build info 'name' must not be empty".to_string(),
            });
        }
        if self.number.trim().is_empty() {
            return Err(AppError::Validation {
                message: "build info 'number' must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vcs {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub module_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub md5: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub dependency_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Paths of parent dependency ids that pulled this one in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_by: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub md5: String,
}

/// Identifies one stored build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfoParams {
    pub build_name: String,
    pub build_number: String,
    pub project_key: Option<String>,
}

impl BuildInfoParams {
    pub fn new(build_name: impl Into<String>, build_number: impl Into<String>) -> Self {
        Self {
            build_name: build_name.into(),
            build_number: build_number.into(),
            project_key: None,
        }
    }

    pub fn with_project(mut self, project_key: Option<String>) -> Self {
        self.project_key = project_key.filter(|p| !p.trim().is_empty());
        self
    }
}

/// A stored build as returned by the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedBuildInfo {
    #[serde(default)]
    pub uri: String,
    #[serde(rename = "buildInfo")]
    pub build_info: BuildInfo,
}

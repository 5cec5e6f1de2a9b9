use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminal result of a graph scan.
///
/// Every field defaults when absent so partial payloads still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResponse {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scan_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<License>,
    #[serde(rename = "component_id", skip_serializing_if = "String::is_empty")]
    pub scanned_component_id: String,
    #[serde(rename = "package_type", skip_serializing_if = "String::is_empty")]
    pub scanned_package_type: String,
    #[serde(rename = "status", skip_serializing_if = "String::is_empty")]
    pub scanned_status: String,
}

impl ScanResponse {
    /// True when any violation asks the build to fail
    pub fn has_build_failing_violations(&self) -> bool {
        self.violations.iter().any(|v| v.fail_build)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Violation {
    pub summary: String,
    pub severity: String,
    #[serde(rename = "type")]
    pub violation_type: String,
    pub components: BTreeMap<String, Component>,
    pub watch_name: String,
    pub issue_id: String,
    pub cves: Vec<Cve>,
    pub references: Vec<String>,
    pub fail_build: bool,
    pub license_key: String,
    pub license_name: String,
    pub ignore_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub cves: Vec<Cve>,
    pub summary: String,
    pub severity: String,
    pub vulnerable_components: Vec<String>,
    pub components: BTreeMap<String, Component>,
    pub issue_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(rename = "license_key")]
    pub key: String,
    pub name: String,
    pub components: BTreeMap<String, Component>,
    pub custom: bool,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub fixed_versions: Vec<String>,
    pub impact_paths: Vec<Vec<ImpactPathNode>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactPathNode {
    pub component_id: String,
    pub full_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cve {
    #[serde(rename = "cve")]
    pub id: String,
    pub cvss_v2_score: String,
    pub cvss_v2_vector: String,
    pub cvss_v3_score: String,
    pub cvss_v3_vector: String,
}

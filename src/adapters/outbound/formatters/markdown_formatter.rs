use crate::ports::outbound::ScanResultFormatter;
use crate::scanning::domain::{Component, Cve, License, ScanResponse, Violation, Vulnerability};
use crate::shared::Result;
use std::collections::BTreeMap;

const VIOLATION_TABLE_HEADER: &str = "| Severity | Type | Summary | Watch | Components | Fail Build |\n";
const VIOLATION_TABLE_SEPARATOR: &str = "|----------|------|---------|-------|------------|------------|\n";

const VULN_TABLE_HEADER: &str = "| Severity | CVE ID | CVSS | Summary | Components | Fixed Versions |\n";
const VULN_TABLE_SEPARATOR: &str = "|----------|--------|------|---------|------------|----------------|\n";

const LICENSE_TABLE_HEADER: &str = "| License | Name | Components |\n";
const LICENSE_TABLE_SEPARATOR: &str = "|---------|------|------------|\n";

/// MarkdownFormatter adapter for a human-readable scan report
///
/// Renders a short summary followed by one table per non-empty section.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell_or_dash(text: &str) -> String {
        if text.is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(text)
        }
    }

    fn component_ids(components: &BTreeMap<String, Component>) -> String {
        let ids: Vec<&str> = components.keys().map(String::as_str).collect();
        Self::cell_or_dash(&ids.join(", "))
    }

    fn fixed_versions(components: &BTreeMap<String, Component>) -> String {
        let mut versions: Vec<&str> = components
            .values()
            .flat_map(|c| c.fixed_versions.iter().map(String::as_str))
            .collect();
        versions.sort_unstable();
        versions.dedup();
        Self::cell_or_dash(&versions.join(", "))
    }

    fn cve_ids(cves: &[Cve]) -> String {
        let ids: Vec<&str> = cves
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| !id.is_empty())
            .collect();
        Self::cell_or_dash(&ids.join(", "))
    }

    /// Highest CVSS score reported, v3 preferred over v2
    fn cvss(cves: &[Cve]) -> String {
        cves.iter()
            .filter_map(|c| {
                let score = if c.cvss_v3_score.is_empty() {
                    &c.cvss_v2_score
                } else {
                    &c.cvss_v3_score
                };
                score.parse::<f64>().ok()
            })
            .fold(None, |max: Option<f64>, score| {
                Some(max.map_or(score, |m| m.max(score)))
            })
            .map(|score| format!("{:.1}", score))
            .unwrap_or_else(|| "-".to_string())
    }

    fn render_header(&self, output: &mut String, response: &ScanResponse) {
        output.push_str("# Scan Report\n\n");
        if !response.scan_id.is_empty() {
            output.push_str(&format!("- **Scan ID**: {}\n", response.scan_id));
        }
        if !response.scanned_component_id.is_empty() {
            output.push_str(&format!(
                "- **Component**: {}\n",
                response.scanned_component_id
            ));
        }
        if !response.scanned_package_type.is_empty() {
            output.push_str(&format!(
                "- **Package Type**: {}\n",
                response.scanned_package_type
            ));
        }
        if !response.scanned_status.is_empty() {
            output.push_str(&format!("- **Status**: {}\n", response.scanned_status));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, response: &ScanResponse) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "Found {} violation(s), {} vulnerability(ies) and {} license(s).\n\n",
            response.violations.len(),
            response.vulnerabilities.len(),
            response.licenses.len()
        ));
        if response.has_build_failing_violations() {
            output.push_str("**❌ At least one violation is marked to fail the build.**\n\n");
        }
    }

    fn render_violations(&self, output: &mut String, violations: &[Violation]) {
        output.push_str("## Violations\n\n");
        if violations.is_empty() {
            output.push_str("*No violations*\n\n");
            return;
        }

        output.push_str(VIOLATION_TABLE_HEADER);
        output.push_str(VIOLATION_TABLE_SEPARATOR);
        for violation in violations {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::cell_or_dash(&violation.severity),
                Self::cell_or_dash(&violation.violation_type),
                Self::cell_or_dash(&violation.summary),
                Self::cell_or_dash(&violation.watch_name),
                Self::component_ids(&violation.components),
                if violation.fail_build { "yes" } else { "no" }
            ));
        }
        output.push('\n');
    }

    fn render_vulnerabilities(&self, output: &mut String, vulnerabilities: &[Vulnerability]) {
        if vulnerabilities.is_empty() {
            return;
        }

        output.push_str("## Vulnerabilities\n\n");
        output.push_str(VULN_TABLE_HEADER);
        output.push_str(VULN_TABLE_SEPARATOR);
        for vuln in vulnerabilities {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::cell_or_dash(&vuln.severity),
                Self::cve_ids(&vuln.cves),
                Self::cvss(&vuln.cves),
                Self::cell_or_dash(&vuln.summary),
                Self::component_ids(&vuln.components),
                Self::fixed_versions(&vuln.components)
            ));
        }
        output.push('\n');
    }

    fn render_licenses(&self, output: &mut String, licenses: &[License]) {
        if licenses.is_empty() {
            return;
        }

        output.push_str("## Licenses\n\n");
        output.push_str(LICENSE_TABLE_HEADER);
        output.push_str(LICENSE_TABLE_SEPARATOR);
        for license in licenses {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::cell_or_dash(&license.key),
                Self::cell_or_dash(&license.name),
                Self::component_ids(&license.components)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanResultFormatter for MarkdownFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);
        self.render_summary(&mut output, response);
        self.render_violations(&mut output, &response.violations);
        self.render_vulnerabilities(&mut output, &response.vulnerabilities);
        self.render_licenses(&mut output, &response.licenses);
        Ok(output)
    }
}

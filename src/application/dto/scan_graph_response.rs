use crate::scanning::domain::{ScanId, ScanResponse};

/// ScanGraphResponse - Response DTO from the scan use case
#[derive(Debug, Clone)]
pub struct ScanGraphResponse {
    pub scan_id: ScanId,
    pub result: ScanResponse,
}

impl ScanGraphResponse {
    pub fn new(scan_id: ScanId, result: ScanResponse) -> Self {
        Self { scan_id, result }
    }

    /// True when the scanner asked for the build to fail
    pub fn has_build_failing_violations(&self) -> bool {
        self.result.has_build_failing_violations()
    }

    /// One-line count of what the scan found
    pub fn summary(&self) -> String {
        format!(
            "{} violation(s), {} vulnerability(ies), {} license(s)",
            self.result.violations.len(),
            self.result.vulnerabilities.len(),
            self.result.licenses.len()
        )
    }
}

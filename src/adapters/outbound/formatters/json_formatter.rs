use crate::ports::outbound::ScanResultFormatter;
use crate::scanning::domain::ScanResponse;
use crate::shared::Result;

/// JsonFormatter adapter rendering the scanner response as indented JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanResultFormatter for JsonFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}

use crate::scanning::domain::ScanResponse;
use crate::shared::Result;

/// ScanResultFormatter port for rendering scan results
///
/// This port abstracts how a finished scan is rendered (JSON, Markdown, etc.)
/// before it is handed to an `OutputPresenter`.
pub trait ScanResultFormatter {
    /// Renders a scan response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ScanResponse) -> Result<String>;
}

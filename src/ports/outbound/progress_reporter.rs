/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing progress output (e.g., to stderr) so the
/// use cases can tell the user what is happening while a scan is pending.
/// Implementations must be `Send + Sync` so a reporter can be shared with
/// background work.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate wait (e.g. a spinner) labelled with `message`
    ///
    /// The wait ends with the next `report_error` or `report_completion`.
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// Scanning domain - Dependency graph scans against the security scanner
///
/// Holds the scan data model (`domain`) and the submission, polling and
/// decoding services (`services`) that talk to the scanner through the
/// `HttpTransport` port.
pub mod domain;
pub mod services;

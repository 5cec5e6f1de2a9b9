/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, console, file system).
pub mod document_reader;
pub mod formatter;
pub mod http_transport;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_reader::DocumentReader;
pub use formatter::ScanResultFormatter;
pub use http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;

/// Mock implementations for testing
mod mock_document_reader;
mod mock_presenter;
mod mock_progress_reporter;
mod mock_transport;

pub use mock_document_reader::MockDocumentReader;
pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_transport::MockTransport;

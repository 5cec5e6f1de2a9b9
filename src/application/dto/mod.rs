/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod publish_build_request;
mod scan_graph_request;
mod scan_graph_response;

pub use output_format::OutputFormat;
pub use publish_build_request::PublishBuildRequest;
pub use scan_graph_request::ScanGraphRequest;
pub use scan_graph_response::ScanGraphResponse;

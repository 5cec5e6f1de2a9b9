/// Shared kernel - Common types and utilities
///
/// Error types, the crate-wide `Result` alias, service connection details
/// and file security checks used across layers.
pub mod error;
pub mod result;
pub mod security;
pub mod service_details;

pub use error::{AppError, ExitCode, ServiceError};
pub use result::Result;
pub use service_details::{Credentials, ServiceDetails};

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no build-failing violations reported
    Success = 0,
    /// The scan reported at least one violation marked `fail_build`
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (HTTP error, timeout, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ViolationsDetected => write!(f, "Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure reported by an `HttpTransport` before any HTTP status was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("request to {url} failed: {reason}")]
pub struct TransportError {
    pub url: String,
    pub reason: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the scan and build-info services.
///
/// Every variant reaches the caller unmodified. The only condition that is
/// retried is "scan not ready yet" (HTTP 202), which is not an error at all.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network or connection failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status the operation does not accept
    #[error("server response: {status}\n{}", indent_json(.body))]
    Status { status: String, body: String },

    /// The exchange succeeded but the payload could not be decoded
    #[error("failed to decode {context}: {reason}")]
    Decode { context: String, reason: String },

    /// The request payload could not be serialized
    #[error("failed to encode {context}: {reason}")]
    Encode { context: String, reason: String },

    /// No terminal response arrived before the polling deadline
    #[error("timeout for sync get scan graph results (scan id {scan_id}, waited {}s)", .waited.as_secs())]
    Timeout { scan_id: String, waited: Duration },
}

impl ServiceError {
    pub fn decode(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        ServiceError::Decode {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn encode(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        ServiceError::Encode {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}

/// Pretty-prints a body when it is JSON, returns it untouched otherwise.
pub fn indent_json(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

/// Application-specific errors for the CLI layer.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse {what}: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    FileParseError {
        what: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Missing configuration: {field}\n\n💡 Hint: {hint}")]
    MissingConfig { field: String, hint: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

//! artifact-scan - dependency graph scanning and build-info publishing
//!
//! This library submits dependency graphs to a security scanner, waits for
//! the scan to finish, and retrieves violations, vulnerabilities and
//! licenses. It also publishes and fetches CI build-info documents in an
//! artifact repository. The code follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scanning`, `build_info`): Data model and the services
//!   that talk to the remote APIs through the `HttpTransport` port
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use artifact_scan::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let details = ServiceDetails::new("https://example.jfrog.io/xray");
//! let transport = Arc::new(ReqwestTransport::new(None)?);
//! let service = ScanService::new(transport, details);
//!
//! let use_case = ScanGraphUseCase::new(
//!     FileSystemReader::new(),
//!     service,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanGraphRequest::new(PathBuf::from("graph.json"))
//!     .with_watches(vec!["prod".to_string()]);
//! let response = use_case.execute(request).await?;
//!
//! let output = JsonFormatter::new().format(&response.result)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod scanning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::ReqwestTransport;
    pub use crate::application::dto::{
        OutputFormat, PublishBuildRequest, ScanGraphRequest, ScanGraphResponse,
    };
    pub use crate::application::use_cases::{
        GetBuildInfoUseCase, PublishBuildInfoUseCase, ScanGraphUseCase,
    };
    pub use crate::build_info::domain::{BuildInfo, BuildInfoParams, Sha256Summary};
    pub use crate::build_info::services::BuildInfoService;
    pub use crate::ports::outbound::{
        DocumentReader, HttpTransport, OutputPresenter, ProgressReporter, ScanResultFormatter,
    };
    pub use crate::scanning::domain::{GraphNode, ResultInclusion, ScanId, ScanRequest, ScanResponse, ScanTarget};
    pub use crate::scanning::services::{ResultPoller, ScanService};
    pub use crate::shared::{Credentials, Result, ServiceDetails};
}

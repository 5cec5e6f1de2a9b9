use crate::application::dto::{ScanGraphRequest, ScanGraphResponse};
use crate::ports::outbound::{DocumentReader, HttpTransport, ProgressReporter};
use crate::scanning::domain::{ScanId, ScanRequest};
use crate::scanning::services::ScanService;
use crate::shared::Result;

/// ScanGraphUseCase - Core use case for scanning a dependency graph
///
/// Loads the graph, submits it, then waits for the scanner to finish and
/// returns its results. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `T` - HttpTransport implementation used by the scan service
/// * `PR` - ProgressReporter implementation
pub struct ScanGraphUseCase<DR, T: HttpTransport, PR> {
    document_reader: DR,
    scan_service: ScanService<T>,
    progress_reporter: PR,
}

impl<DR, T, PR> ScanGraphUseCase<DR, T, PR>
where
    DR: DocumentReader,
    T: HttpTransport,
    PR: ProgressReporter,
{
    pub fn new(document_reader: DR, scan_service: ScanService<T>, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            scan_service,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Fails when the graph cannot be read, the submission is rejected, or
    /// no result arrives before the configured maximum wait.
    pub async fn execute(&self, request: ScanGraphRequest) -> Result<ScanGraphResponse> {
        let include = request.include;
        let scan_request = self.load_request(request)?;
        let scan_id = self.submit(&scan_request).await?;

        self.progress_reporter
            .report_waiting(&format!("Waiting for scan {} to complete", scan_id));

        match self
            .scan_service
            .get_scan_graph_results(&scan_id, include)
            .await
        {
            Ok(result) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Scan {} completed", scan_id));
                Ok(ScanGraphResponse::new(scan_id, result))
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Scan {} did not complete", scan_id));
                Err(e.into())
            }
        }
    }

    fn load_request(&self, request: ScanGraphRequest) -> Result<ScanRequest> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency graph from: {}",
            request.graph_path.display()
        ));
        let graph = self.document_reader.read_graph(&request.graph_path)?;
        self.progress_reporter.report(&format!(
            "✅ Loaded graph with {} component(s)",
            graph.node_count()
        ));

        let scan_request =
            ScanRequest::from_options(graph, request.project, request.repo_path, request.watches);
        if let Some(target) = &scan_request.target {
            self.progress_reporter
                .report(&format!("🎯 Scanning with {} context", target.kind()));
        }
        Ok(scan_request)
    }

    async fn submit(&self, scan_request: &ScanRequest) -> Result<ScanId> {
        self.progress_reporter
            .report("📤 Submitting dependency graph for scanning...");

        let scan_id = self.scan_service.scan_graph(scan_request).await.map_err(|e| {
            self.progress_reporter
                .report_error("❌ Graph submission failed");
            e
        })?;

        tracing::debug!(scan_id = %scan_id, "graph accepted");
        Ok(scan_id)
    }
}

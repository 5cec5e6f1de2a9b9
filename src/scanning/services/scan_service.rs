use super::{submit_graph, ResponseDecoder, ResultPoller, SCAN_GRAPH_API};
use crate::ports::outbound::HttpTransport;
use crate::scanning::domain::{ResultInclusion, ScanId, ScanRequest, ScanResponse};
use crate::shared::{ServiceDetails, ServiceError};
use std::sync::Arc;
use std::time::Duration;

/// ScanService submits dependency graphs to the scanner and fetches results.
///
/// Holds one transport and one immutable set of service details; neither is
/// mutated by any operation, so a service can be shared freely.
pub struct ScanService<T: HttpTransport> {
    transport: Arc<T>,
    details: ServiceDetails,
    max_wait: Duration,
}

impl<T: HttpTransport> ScanService<T> {
    pub fn new(transport: Arc<T>, details: ServiceDetails) -> Self {
        Self {
            transport,
            details,
            max_wait: Duration::ZERO,
        }
    }

    /// Overrides how long `get_scan_graph_results` waits. Zero means the default.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn details(&self) -> &ServiceDetails {
        &self.details
    }

    /// Submits the request's graph and returns the scan id.
    pub async fn scan_graph(&self, request: &ScanRequest) -> Result<ScanId, ServiceError> {
        submit_graph(self.transport.as_ref(), &self.details, request).await
    }

    /// URL queried while waiting for a scan's results
    pub fn results_url(&self, scan_id: &ScanId, include: ResultInclusion) -> String {
        format!(
            "{}{}/{}{}",
            self.details.url(),
            SCAN_GRAPH_API,
            urlencoding::encode(scan_id.as_str()),
            include.query_string()
        )
    }

    /// Waits until the scan is complete and decodes its results.
    ///
    /// The returned response always carries the scan id, even when the
    /// server omits it from the payload.
    pub async fn get_scan_graph_results(
        &self,
        scan_id: &ScanId,
        include: ResultInclusion,
    ) -> Result<ScanResponse, ServiceError> {
        let url = self.results_url(scan_id, include);
        let poller = ResultPoller::new(Arc::clone(&self.transport)).with_max_wait(self.max_wait);

        let body = poller.poll(&url, scan_id).await?;
        let mut response = ResponseDecoder::decode_scan_response(&body)?;
        if response.scan_id.is_empty() {
            response.scan_id = scan_id.to_string();
        }
        Ok(response)
    }
}

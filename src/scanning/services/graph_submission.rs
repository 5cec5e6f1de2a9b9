use super::ResponseDecoder;
use crate::ports::outbound::{HttpRequest, HttpTransport};
use crate::scanning::domain::{ScanId, ScanRequest};
use crate::shared::{ServiceDetails, ServiceError};

/// Graph scan endpoint, relative to the scanner base URL
pub const SCAN_GRAPH_API: &str = "api/v1/scan/graph";

/// Submission URL including the target selection query, if any
pub fn submission_url(details: &ServiceDetails, request: &ScanRequest) -> String {
    let mut url = format!("{}{}", details.url(), SCAN_GRAPH_API);
    if let Some(target) = &request.target {
        url.push_str(&target.query_string());
    }
    url
}

/// Posts the dependency graph and returns the scan id assigned to it.
///
/// Accepts 200 and 201. Any other status becomes `ServiceError::Status`
/// carrying the status line and the response body.
pub async fn submit_graph<T>(
    transport: &T,
    details: &ServiceDetails,
    request: &ScanRequest,
) -> Result<ScanId, ServiceError>
where
    T: HttpTransport + ?Sized,
{
    let body = serde_json::to_vec(&request.graph)
        .map_err(|e| ServiceError::encode("dependency graph", e))?;
    let url = submission_url(details, request);

    tracing::debug!(url = %url, components = request.graph.node_count(), "submitting scan graph");
    let response = transport
        .send(HttpRequest::post(url, body).with_content_type("application/json"))
        .await?;

    if !matches!(response.status, 200 | 201) {
        return Err(ServiceError::Status {
            status: response.status_line(),
            body: response.body_text(),
        });
    }

    ResponseDecoder::decode_scan_id(&response.body)
}

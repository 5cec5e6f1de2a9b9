use crate::scanning::domain::{ScanId, ScanResponse};
use crate::shared::ServiceError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RequestScanResponse {
    scan_id: String,
}

/// Decodes scanner payloads into domain types.
///
/// A payload that cannot be parsed is a `ServiceError::Decode`: the HTTP
/// exchange itself succeeded, so it is neither a transport nor a status
/// failure.
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Extracts the scan id from a graph submission response
    pub fn decode_scan_id(body: &[u8]) -> Result<ScanId, ServiceError> {
        let response: RequestScanResponse = serde_json::from_slice(body)
            .map_err(|e| ServiceError::decode("scan submission response", e))?;
        ScanId::new(response.scan_id)
    }

    /// Parses a terminal scan results payload
    pub fn decode_scan_response(body: &[u8]) -> Result<ScanResponse, ServiceError> {
        serde_json::from_slice(body).map_err(|e| ServiceError::decode("scan results", e))
    }
}

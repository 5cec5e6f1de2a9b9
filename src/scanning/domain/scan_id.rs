use crate::shared::ServiceError;

/// Opaque identifier of a scan job, returned at submission time.
///
/// The only token needed to poll for results. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanId(String);

impl ScanId {
    pub fn new(id: impl Into<String>) -> Result<Self, ServiceError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ServiceError::decode(
                "scan submission response",
                "scan_id is empty",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

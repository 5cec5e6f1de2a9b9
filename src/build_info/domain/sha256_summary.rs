/// Outcome of a build-info publish.
///
/// `succeeded` stays false for dry runs and failed deployments; `sha256`
/// holds the checksum the repository reported for the stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sha256Summary {
    succeeded: bool,
    sha256: Option<String>,
}

impl Sha256Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeeded(sha256: Option<String>) -> Self {
        Self {
            succeeded: true,
            sha256: sha256.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }
}

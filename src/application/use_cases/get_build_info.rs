use crate::build_info::domain::{BuildInfoParams, PublishedBuildInfo};
use crate::build_info::services::BuildInfoService;
use crate::ports::outbound::{HttpTransport, ProgressReporter};
use crate::shared::Result;

/// GetBuildInfoUseCase - Fetches a stored build-info document
pub struct GetBuildInfoUseCase<T: HttpTransport, PR> {
    build_info_service: BuildInfoService<T>,
    progress_reporter: PR,
}

impl<T, PR> GetBuildInfoUseCase<T, PR>
where
    T: HttpTransport,
    PR: ProgressReporter,
{
    pub fn new(build_info_service: BuildInfoService<T>, progress_reporter: PR) -> Self {
        Self {
            build_info_service,
            progress_reporter,
        }
    }

    /// Returns `None` when the repository has no such build.
    pub async fn execute(&self, params: &BuildInfoParams) -> Result<Option<PublishedBuildInfo>> {
        self.progress_reporter.report(&format!(
            "🔍 Fetching build info {}/{}...",
            params.build_name, params.build_number
        ));

        let published = self.build_info_service.get(params).await?;
        match &published {
            Some(_) => self.progress_reporter.report_completion("✅ Build info found"),
            None => self.progress_reporter.report_error(&format!(
                "⚠️  Build {}/{} was not found",
                params.build_name, params.build_number
            )),
        }
        Ok(published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HttpRequest, HttpResponse};
    use crate::shared::error::TransportError;
    use crate::shared::ServiceDetails;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedTransport(HttpResponse);

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn send(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            Ok(self.0.clone())
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_waiting(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn use_case(response: HttpResponse) -> GetBuildInfoUseCase<FixedTransport, SilentReporter> {
        let service = BuildInfoService::new(
            Arc::new(FixedTransport(response)),
            ServiceDetails::new("http://art.local/artifactory"),
        );
        GetBuildInfoUseCase::new(service, SilentReporter)
    }

    #[tokio::test]
    async fn test_get_found() {
        let body = r#"{"uri":"http://art.local/artifactory/api/build/b/1","buildInfo":{"name":"b","number":"1"}}"#;
        let published = use_case(HttpResponse::new(200, body))
            .execute(&BuildInfoParams::new("b", "1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(published.build_info.number, "1");
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let published = use_case(HttpResponse::new(404, ""))
            .execute(&BuildInfoParams::new("b", "1"))
            .await
            .unwrap();
        assert!(published.is_none());
    }
}

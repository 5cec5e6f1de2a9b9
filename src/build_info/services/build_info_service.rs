use crate::build_info::domain::{BuildInfo, BuildInfoParams, PublishedBuildInfo, Sha256Summary};
use crate::ports::outbound::{HttpRequest, HttpTransport};
use crate::shared::{ServiceDetails, ServiceError};
use std::sync::Arc;

/// Media type of build-info documents
pub const BUILD_INFO_CONTENT_TYPE: &str = "application/vnd.org.jfrog.artifactory+json";

const BUILD_API: &str = "api/build";
const CHECKSUM_HEADER: &str = "X-Checksum-Sha256";

/// BuildInfoService stores and retrieves build-info documents.
pub struct BuildInfoService<T: HttpTransport> {
    transport: Arc<T>,
    details: ServiceDetails,
}

impl<T: HttpTransport> BuildInfoService<T> {
    pub fn new(transport: Arc<T>, details: ServiceDetails) -> Self {
        Self { transport, details }
    }

    pub fn details(&self) -> &ServiceDetails {
        &self.details
    }

    /// Deploys `build` and reports the checksum the repository stored.
    ///
    /// Accepts 200, 201 and 204; anything else is `ServiceError::Status`.
    pub async fn publish(
        &self,
        build: &BuildInfo,
        project_key: Option<&str>,
    ) -> Result<Sha256Summary, ServiceError> {
        let content = serde_json::to_vec(build).map_err(|e| ServiceError::encode("build info", e))?;
        let url = format!(
            "{}{}{}",
            self.details.url(),
            BUILD_API,
            project_query(project_key)
        );

        tracing::info!(build = %build.name, number = %build.number, "Deploying build info...");
        let response = self
            .transport
            .send(HttpRequest::put(url, content).with_content_type(BUILD_INFO_CONTENT_TYPE))
            .await?;

        if !matches!(response.status, 200 | 201 | 204) {
            return Err(ServiceError::Status {
                status: response.status_line(),
                body: response.body_text(),
            });
        }
        tracing::debug!(status = %response.status_line(), "artifact repository response");

        let summary = Sha256Summary::succeeded(response.header(CHECKSUM_HEADER).map(String::from));
        tracing::info!(
            "Build info successfully deployed. Browse it under {}",
            self.published_build_url(build, project_key)
        );
        Ok(summary)
    }

    /// Web UI address of a published build
    pub fn published_build_url(&self, build: &BuildInfo, project_key: Option<&str>) -> String {
        format!(
            "{}webapp/builds/{}/{}{}",
            self.details.url(),
            urlencoding::encode(&build.name),
            urlencoding::encode(&build.number),
            project_query(project_key)
        )
    }

    /// Fetches a stored build. A 404 is reported as `Ok(None)`.
    pub async fn get(
        &self,
        params: &BuildInfoParams,
    ) -> Result<Option<PublishedBuildInfo>, ServiceError> {
        let url = format!(
            "{}{}/{}/{}{}",
            self.details.url(),
            BUILD_API,
            urlencoding::encode(&params.build_name),
            urlencoding::encode(&params.build_number),
            project_query(params.project_key.as_deref())
        );

        let response = self.transport.send(HttpRequest::get(url)).await?;
        match response.status {
            200 => serde_json::from_slice(&response.body)
                .map(Some)
                .map_err(|e| ServiceError::decode("build info", e)),
            404 => {
                tracing::debug!(build = %params.build_name, number = %params.build_number, "build info not found");
                Ok(None)
            }
            _ => Err(ServiceError::Status {
                status: response.status_line(),
                body: response.body_text(),
            }),
        }
    }
}

fn project_query(project_key: Option<&str>) -> String {
    match project_key.filter(|p| !p.trim().is_empty()) {
        Some(key) => format!("?project={}", urlencoding::encode(key)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HttpMethod, HttpResponse};
    use crate::shared::error::TransportError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct OneShotTransport {
        response: Mutex<Option<Result<HttpResponse, TransportError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl OneShotTransport {
        fn new(response: Result<HttpResponse, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(response)),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for OneShotTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(TransportError::new("", "unexpected request")))
        }
    }

    fn service(transport: Arc<OneShotTransport>) -> BuildInfoService<OneShotTransport> {
        BuildInfoService::new(transport, ServiceDetails::new("http://art.local/artifactory"))
    }

    #[tokio::test]
    async fn test_publish_captures_checksum() {
        let transport = OneShotTransport::new(Ok(
            HttpResponse::new(204, "").with_header("X-Checksum-Sha256", "f00d")
        ));
        let build = BuildInfo::new("my build", "7");

        let summary = service(Arc::clone(&transport))
            .publish(&build, Some("proj1"))
            .await
            .unwrap();
        assert!(summary.is_succeeded());
        assert_eq!(summary.sha256(), Some("f00d"));

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].url, "http://art.local/artifactory/api/build?project=proj1");
        assert!(requests[0]
            .headers
            .contains(&("Content-Type".to_string(), BUILD_INFO_CONTENT_TYPE.to_string())));
    }

    #[tokio::test]
    async fn test_publish_rejected() {
        let transport = OneShotTransport::new(Ok(HttpResponse::new(403, "forbidden")));
        let result = service(transport).publish(&BuildInfo::new("b", "1"), None).await;
        match result {
            Err(ServiceError::Status { status, body }) => {
                assert_eq!(status, "403 Forbidden");
                assert_eq!(body, "forbidden");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_publish_transport_failure() {
        let transport = OneShotTransport::new(Err(TransportError::new("http://art", "refused")));
        let result = service(transport).publish(&BuildInfo::new("b", "1"), None).await;
        assert!(matches!(result, Err(ServiceError::Transport(_))));
    }

    #[test]
    fn test_published_build_url_encodes_segments() {
        let service = service(OneShotTransport::new(Ok(HttpResponse::new(200, ""))));
        let build = BuildInfo::new("my build", "1.0/rc");
        assert_eq!(
            service.published_build_url(&build, None),
            "http://art.local/artifactory/webapp/builds/my%20build/1.0%2Frc"
        );
        assert_eq!(
            service.published_build_url(&build, Some("p")),
            "http://art.local/artifactory/webapp/builds/my%20build/1.0%2Frc?project=p"
        );
    }

    #[tokio::test]
    async fn test_get_found() {
        let transport = OneShotTransport::new(Ok(HttpResponse::new(
            200,
            r#"{"uri":"http://art.local/artifactory/api/build/b/1","buildInfo":{"name":"b","number":"1"}}"#,
        )));
        let params = BuildInfoParams::new("b", "1").with_project(Some("proj1".to_string()));

        let published = service(Arc::clone(&transport)).get(&params).await.unwrap().unwrap();
        assert_eq!(published.build_info.number, "1");
        assert_eq!(
            transport.requests.lock().unwrap()[0].url,
            "http://art.local/artifactory/api/build/b/1?project=proj1"
        );
    }

    #[tokio::test]
    async fn test_get_not_found_is_none() {
        let transport = OneShotTransport::new(Ok(HttpResponse::new(404, "")));
        let result = service(transport).get(&BuildInfoParams::new("b", "1")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_malformed_body() {
        let transport = OneShotTransport::new(Ok(HttpResponse::new(200, "{")));
        let result = service(transport).get(&BuildInfoParams::new("b", "1")).await;
        assert!(matches!(result, Err(ServiceError::Decode { .. })));
    }
}

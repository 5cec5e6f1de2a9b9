use crate::ports::outbound::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::shared::error::TransportError;
use crate::shared::{Credentials, Result};
use async_trait::async_trait;
use std::time::Duration;

/// ReqwestTransport adapter performing HTTP calls with an async reqwest client
///
/// Implements the HttpTransport port. Credentials are attached to every
/// request. The per-request timeout is independent of the scan poller's
/// deadline, which bounds the whole polling session.
pub struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

impl ReqwestTransport {
    const TIMEOUT_SECONDS: u64 = 120;

    /// Creates a transport with default configuration
    pub fn new(credentials: Option<Credentials>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("artifact-scan/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            credentials,
        })
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let url = request.url;
        let mut builder = self.client.request(Self::method(request.method), url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &self.credentials {
            Some(Credentials::Basic { user, password }) => builder.basic_auth(user, Some(password)),
            Some(Credentials::AccessToken(token)) => builder.bearer_auth(token),
            None => builder,
        };
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(url.as_str(), e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(url.as_str(), format!("failed to read body: {}", e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

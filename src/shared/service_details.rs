use std::fmt;

/// Credentials attached to every request sent to a service.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { user: String, password: String },
    AccessToken(String),
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("password", &"***")
                .finish(),
            Credentials::AccessToken(_) => f.debug_tuple("AccessToken").field(&"***").finish(),
        }
    }
}

/// Connection details for one remote service.
///
/// Immutable once built; services receive it explicitly instead of reading
/// shared global state. The base URL always ends with a single `/` so API
/// paths can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetails {
    url: String,
    credentials: Option<Credentials>,
}

impl ServiceDetails {
    pub fn new(url: &str) -> Self {
        Self {
            url: format!("{}/", url.trim().trim_end_matches('/')),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

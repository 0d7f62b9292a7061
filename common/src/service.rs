use async_trait::async_trait;

use crate::req::{SensorId, SensorRecord};

/// Local storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("no access token available, request not sent")]
    MissingToken,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Decode(e.to_string())
    }
}

/// Any status outside 2xx is a failure.
pub fn check_status(status: u16) -> Result<(), ServiceError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ServiceError::Status(status))
    }
}

pub fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    Ok(serde_json::from_str(body)?)
}

/// Source of the bearer token, consulted once per request.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Value of the `Authorization` header. Fails before anything is sent when no
/// usable token exists.
pub fn authorization_header(credentials: &impl CredentialProvider) -> Result<String, ServiceError> {
    match credentials.bearer_token() {
        Some(token) if !token.trim().is_empty() => Ok(format!("Bearer {token}")),
        _ => Err(ServiceError::MissingToken),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The four calls the API exposes for sensors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Detail(SensorId),
    Update(SensorId),
    Delete(SensorId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::List | Endpoint::Detail(_) => Method::Get,
            Endpoint::Update(_) => Method::Put,
            Endpoint::Delete(_) => Method::Delete,
        }
    }

    /// Path relative to the API base url. Mutations carry a trailing slash,
    /// the detail read does not.
    pub fn path(&self) -> String {
        match self {
            Endpoint::List => "sensores/".to_owned(),
            Endpoint::Detail(id) => format!("sensores/{id}"),
            Endpoint::Update(id) | Endpoint::Delete(id) => format!("sensores/{id}/"),
        }
    }
}

/// Remote store of sensor records.
#[async_trait(?Send)]
pub trait SensorService {
    async fn fetch(&self, id: &SensorId) -> Result<SensorRecord, ServiceError>;

    async fn list(&self) -> Result<Vec<SensorRecord>, ServiceError>;

    /// Full replacement of the record stored under `id`.
    async fn update(&self, id: &SensorId, record: &SensorRecord) -> Result<(), ServiceError>;

    async fn delete(&self, id: &SensorId) -> Result<(), ServiceError>;
}

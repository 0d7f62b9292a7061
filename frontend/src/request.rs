use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    RequestBuilder, Response,
};
use sensor_common::{
    service::{authorization_header, check_status, decode_body, Endpoint, Method},
    CredentialProvider, SensorId, SensorRecord, SensorService, ServiceError,
};

use crate::{config::ApiConfig, storage::LocalStorageCredentials};

pub struct HttpSensorService<C> {
    client: reqwest::Client,
    config: ApiConfig,
    credentials: C,
}

/// The service every page talks to.
pub fn sensor_service() -> HttpSensorService<LocalStorageCredentials> {
    HttpSensorService::new(ApiConfig::default(), LocalStorageCredentials)
}

impl<C: CredentialProvider> HttpSensorService<C> {
    pub fn new(config: ApiConfig, credentials: C) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            credentials,
        }
    }

    fn request(&self, endpoint: &Endpoint) -> Result<RequestBuilder, ServiceError> {
        // the token is looked up again for every request
        let authorization = authorization_header(&self.credentials)?;
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let url = self.config.url(&endpoint.path());
        debug!("{} {url}", method);

        Ok(self
            .client
            .request(method, url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json"))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;

    check_status(response.status().as_u16())?;
    Ok(response)
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let body = response
        .text()
        .await
        .map_err(|e| ServiceError::Transport(e.to_string()))?;
    decode_body(&body)
}

#[async_trait(?Send)]
impl<C: CredentialProvider> SensorService for HttpSensorService<C> {
    async fn fetch(&self, id: &SensorId) -> Result<SensorRecord, ServiceError> {
        let response = send(self.request(&Endpoint::Detail(id.clone()))?).await?;
        decode(response).await
    }

    async fn list(&self) -> Result<Vec<SensorRecord>, ServiceError> {
        let response = send(self.request(&Endpoint::List)?).await?;
        decode(response).await
    }

    async fn update(&self, id: &SensorId, record: &SensorRecord) -> Result<(), ServiceError> {
        send(self.request(&Endpoint::Update(id.clone()))?.json(record)).await?;
        Ok(())
    }

    async fn delete(&self, id: &SensorId) -> Result<(), ServiceError> {
        send(self.request(&Endpoint::Delete(id.clone()))?).await?;
        Ok(())
    }
}

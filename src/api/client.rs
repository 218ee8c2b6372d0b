// src/api/client.rs
use crate::api::ApiError;
use crate::domain::{NewProperty, Property};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("property-dashboard/", env!("CARGO_PKG_VERSION"));

/// The remote listing store. Handlers only ever talk to it through this trait.
pub trait PropertyApi: Send + Sync {
    /// `GET /properties`
    fn list_properties(&self) -> Result<Vec<Property>, ApiError>;

    /// `POST /properties`. The created record in the response is not read.
    fn create_property(&self, property: &NewProperty) -> Result<(), ApiError>;
}

pub struct HttpPropertyApi {
    client: Client,
    base_url: String,
}

impl HttpPropertyApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn properties_url(&self) -> String {
        format!("{}/properties", self.base_url)
    }
}

impl PropertyApi for HttpPropertyApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        let url = self.properties_url();
        debug!(%url, "fetching properties");

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = ensure_success(resp)?;

        let body = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn create_property(&self, property: &NewProperty) -> Result<(), ApiError> {
        let url = self.properties_url();
        debug!(%url, name = %property.name, "creating property");

        let resp = self
            .client
            .post(&url)
            .json(property)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(resp).map(|_| ())
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    Err(ApiError::Status(status, text))
}

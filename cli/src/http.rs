//! Thin `reqwest` wrapper for the vehicles API.
//!
//! Implements `VehicleTransport` so `add-car` runs through the same submit
//! coordinator as the browser form, plus typed helpers for the read, update
//! and delete commands.

use std::time::Duration;

use reqwest::{Method, Url};
use serde_json::{Map, Value};
use vehicles::{TransportError, VEHICLES_ENDPOINT, VehiclePayload, VehicleRecord, VehicleTransport};

use crate::CliError;

pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client rooted at `base_url`. With `timeout = None` the
    /// transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, CliError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, base_url: base_url.to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.http.get(self.url("/")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::ServerError {
                status: status.as_u16(),
                message: "health check failed".to_owned(),
            });
        }
        Ok(())
    }

    /// Collection URL, `{base}/api/vehicles`.
    pub fn vehicles_url(&self) -> Result<Url, CliError> {
        let url = self.url(VEHICLES_ENDPOINT);
        Url::parse(&url).map_err(|_| CliError::InvalidBaseUrl(url))
    }

    /// Item URL with `vehicle_id` percent-encoded as a single path segment.
    pub fn vehicle_url(&self, vehicle_id: &str) -> Result<Url, CliError> {
        let mut url = self.vehicles_url()?;
        url.path_segments_mut()
            .map_err(|()| CliError::InvalidBaseUrl(self.base_url.clone()))?
            .push(vehicle_id);
        Ok(url)
    }

    pub async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, CliError> {
        let value = self.api_request(Method::GET, self.vehicles_url()?, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_vehicle(&self, vehicle_id: &str) -> Result<VehicleRecord, CliError> {
        let value = self.api_request(Method::GET, self.vehicle_url(vehicle_id)?, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Merge `updates` into the stored document and return the new record.
    pub async fn update_vehicle(
        &self,
        vehicle_id: &str,
        updates: Map<String, Value>,
    ) -> Result<VehicleRecord, CliError> {
        let body = Value::Object(updates);
        let value = self
            .api_request(Method::PUT, self.vehicle_url(vehicle_id)?, Some(&body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Delete one vehicle. The acknowledgement body is returned as-is.
    pub async fn delete_vehicle(&self, vehicle_id: &str) -> Result<Value, CliError> {
        self.api_request(Method::DELETE, self.vehicle_url(vehicle_id)?, None).await
    }

    async fn api_request(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Value, CliError> {
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let value = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::Null);

        if !status.is_success() {
            return Err(CliError::ServerError { status: status.as_u16(), message: value.to_string() });
        }

        Ok(value)
    }
}

#[async_trait::async_trait(?Send)]
impl VehicleTransport for HttpClient {
    async fn create_vehicle(&self, payload: &VehiclePayload) -> Result<u16, TransportError> {
        let response = self
            .http
            .post(self.url(VEHICLES_ENDPOINT))
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

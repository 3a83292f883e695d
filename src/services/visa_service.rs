use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::{AppError, Result};
use crate::models::visa::VisaRecord;

/// HTTP client for the visa records backend.
///
/// Every call is a single awaited request; there is no retry, timeout,
/// or cancellation handling. Failures are terminal for that attempt and
/// reported through the error taxonomy: no response at all maps to
/// `NetworkError`, a non-success status to `BackendError` (carrying the
/// backend's `msg` when the body has one), and a missing record to
/// `NotFound`.
pub struct VisaService {
    base_url: String,
    client: Client,
}

impl VisaService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn visas_url(&self) -> String {
        format!("{}/api/visas", self.base_url)
    }

    pub async fn list_visas(&self) -> Result<Vec<VisaRecord>> {
        let url = self.visas_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch visas: {}", e)))?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        response
            .json::<Vec<VisaRecord>>()
            .await
            .map_err(|e| AppError::SerializationError(format!("Failed to parse visa list: {}", e)))
    }

    pub async fn get_visa(&self, id: &str) -> Result<VisaRecord> {
        let url = format!("{}/{}", self.visas_url(), id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch visa: {}", e)))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Visa {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        response
            .json::<VisaRecord>()
            .await
            .map_err(|e| AppError::SerializationError(format!("Failed to parse visa: {}", e)))
    }

    pub async fn create_visa(&self, record: &VisaRecord) -> Result<VisaRecord> {
        let url = self.visas_url();
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to reach backend: {}", e)))?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        response
            .json::<VisaRecord>()
            .await
            .map_err(|e| AppError::SerializationError(format!("Failed to parse created visa: {}", e)))
    }

    pub async fn update_visa(&self, id: &str, record: &VisaRecord) -> Result<VisaRecord> {
        let url = format!("{}/{}", self.visas_url(), id);
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to reach backend: {}", e)))?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        response
            .json::<VisaRecord>()
            .await
            .map_err(|e| AppError::SerializationError(format!("Failed to parse updated visa: {}", e)))
    }

    pub async fn delete_visa(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.visas_url(), id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to reach backend: {}", e)))?;
        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }
        Ok(())
    }

    // Extracts the backend's "msg" field when the error body carries one.
    async fn backend_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("msg").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| "Something went wrong".to_string());
        error!(status = %status, "Backend request failed: {}", message);
        AppError::BackendError(message)
    }
}

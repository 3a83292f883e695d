use std::collections::HashMap;

use reqwest::Client;
use tracing::warn;

use crate::errors::{AppError, Result};
use crate::models::country::Country;

/// Loads the static country reference list used by selection fields.
pub struct CountryService {
    url: String,
    client: Client,
}

impl CountryService {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// Fetches the country mapping once and returns its values sorted by
    /// name. Any failure degrades to an empty list so the form still
    /// renders; selection fields simply have no options.
    pub async fn fetch_countries(&self) -> Vec<Country> {
        match self.try_fetch().await {
            Ok(countries) => countries,
            Err(err) => {
                warn!("Error fetching countries: {}", err);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<Country>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to fetch countries: {}", e)))?;
        if !response.status().is_success() {
            return Err(AppError::BackendError(format!(
                "Country source returned status {}",
                response.status()
            )));
        }
        // The source is a mapping of arbitrary keys to {name} objects.
        let data: HashMap<String, Country> = response
            .json()
            .await
            .map_err(|e| AppError::SerializationError(format!("Failed to parse countries: {}", e)))?;
        let mut countries: Vec<Country> = data.into_values().collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }
}

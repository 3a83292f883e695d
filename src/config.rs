use std::env;

const DEFAULT_API_URL: &str = "https://visa-consultancy-backend.onrender.com";
const DEFAULT_COUNTRIES_URL: &str =
    "https://raw.githubusercontent.com/iamspruce/search-filter-painate-reactjs/main/data/countries.json";
const DEFAULT_TOKEN_FILE: &str = "visa_console.token";

/// Runtime settings for the console, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub countries_url: String,
    pub token_file: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_base_url: var_or("VISA_API_URL", DEFAULT_API_URL),
            countries_url: var_or("VISA_COUNTRIES_URL", DEFAULT_COUNTRIES_URL),
            token_file: var_or("VISA_TOKEN_FILE", DEFAULT_TOKEN_FILE),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::debug!("{} not set, using default: {}", key, default);
            default.to_string()
        }
    }
}

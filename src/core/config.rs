use std::env;

pub const GEMINI_API_URL_VAR: &str = "GEMINI_API_URL";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const STORE_URL_VAR: &str = "NOTES_STORE_URL";
pub const STORE_KEY_VAR: &str = "NOTES_STORE_KEY";
pub const ACCESS_TOKEN_VAR: &str = "NOTES_ACCESS_TOKEN";

/// Settings for the generative-text endpoint. Both values may be absent at
/// load time; the adapter rejects a missing value when a call is made.
#[derive(Debug, Clone, Default)]
pub struct GeminiConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl GeminiConfig {
    #[must_use]
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
            api_key: Some(api_key.into()),
        }
    }

    /// Returns `(url, key)` or the names of whichever settings are missing.
    ///
    /// # Errors
    ///
    /// Returns a comma-separated list of missing variable names.
    pub fn require(&self) -> Result<(&str, &str), String> {
        let url = non_blank(self.api_url.as_deref());
        let key = non_blank(self.api_key.as_deref());

        match (url, key) {
            (Some(url), Some(key)) => Ok((url, key)),
            (url, key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(GEMINI_API_URL_VAR);
                }
                if key.is_none() {
                    missing.push(GEMINI_API_KEY_VAR);
                }
                Err(format!("missing {}", missing.join(", ")))
            }
        }
    }
}

/// Connection settings for the REST record store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            gemini: GeminiConfig {
                api_url: get(GEMINI_API_URL_VAR),
                api_key: get(GEMINI_API_KEY_VAR),
            },
            store: StoreConfig {
                url: get(STORE_URL_VAR),
                api_key: get(STORE_KEY_VAR),
                access_token: get(ACCESS_TOKEN_VAR),
            },
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

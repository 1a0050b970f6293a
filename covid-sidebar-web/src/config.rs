use crate::api::{ApiClient, DEFAULT_API};
use serde::Deserialize;

pub const DEFAULT_COUNTRY: &str = "US";

/// Settings read from the page query string, e.g. `?country=DE`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    pub country: Option<String>,
    pub api: Option<String>,
}

impl ShellOptions {
    /// Parses a query string with or without the leading `?`. Malformed input
    /// falls back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        serde_urlencoded::from_str(query).unwrap_or_else(|err| {
            log::warn!("ignoring query string {}: {}", query, err);
            ShellOptions::default()
        })
    }

    pub fn from_location() -> Self {
        match gloo_utils::window().location().search() {
            Ok(query) => Self::from_query(&query),
            Err(_) => ShellOptions::default(),
        }
    }

    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.api.as_deref().unwrap_or(DEFAULT_API))
    }
}

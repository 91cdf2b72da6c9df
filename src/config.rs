use std::time::Duration;

use crate::error::{LitQueryError, Result};

/// Europe PMC REST search endpoint
pub const EUROPE_PMC_SEARCH_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest/search";

/// Environment variable overriding the search endpoint
pub const BASE_URL_ENV: &str = "GENOME_LIT_BASE_URL";

/// Environment variable setting a request timeout in whole seconds
pub const TIMEOUT_ENV: &str = "GENOME_LIT_TIMEOUT_SECS";

/// Configuration for the Europe PMC client
///
/// By default requests go to the public search endpoint with no timeout,
/// asking for JSON and the `core` result type (which carries the abstract).
///
/// # Example
///
/// ```
/// use genome_lit_query::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("http://localhost:8080/search")
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.effective_base_url(), "http://localhost:8080/search");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub format: String,
    pub result_type: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            user_agent: None,
            format: "json".to_string(),
            result_type: "core".to_string(),
        }
    }

    /// Build a configuration from `GENOME_LIT_BASE_URL` and `GENOME_LIT_TIMEOUT_SECS`
    ///
    /// Unset variables leave the defaults in place.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| LitQueryError::InvalidConfig {
                    message: format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(EUROPE_PMC_SEARCH_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("genome-lit-query/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Query parameters for an exact-phrase search on `accession`
    pub fn build_search_params(&self, accession: &str) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), format!("\"{accession}\"")),
            ("format".to_string(), self.format.clone()),
            ("resultType".to_string(), self.result_type.clone()),
        ]
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

use crate::config::ClientConfig;
use crate::error::{LitQueryError, Result};
use crate::europepmc::models::SearchResult;
use crate::europepmc::responses::SearchResponse;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Client for the Europe PMC literature search API
#[derive(Clone, Debug)]
pub struct EuropePmcClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl EuropePmcClient {
    /// Create a client against the public Europe PMC endpoint
    ///
    /// No timeout is configured, so a stalled request waits indefinitely.
    ///
    /// # Example
    ///
    /// ```
    /// use genome_lit_query::EuropePmcClient;
    ///
    /// let client = EuropePmcClient::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, timeout and user agent settings
    ///
    /// # Errors
    ///
    /// * `LitQueryError::RequestError` - If the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Find the first paper mentioning a genome assembly accession
    ///
    /// The accession is searched as an exact phrase. Only the first hit is
    /// returned; an empty result list is `Ok(None)`. The accession is not
    /// validated, so a blank one is sent as-is and usually finds nothing.
    ///
    /// # Errors
    ///
    /// * `LitQueryError::RequestError` - If the HTTP request fails
    /// * `LitQueryError::ApiError` - If the service answers with a non-2xx status
    /// * `LitQueryError::JsonError` - If the body is not JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use genome_lit_query::EuropePmcClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EuropePmcClient::new()?;
    ///     if let Some(paper) = client.fetch_by_accession("GCA_000355885.1").await? {
    ///         println!("Title: {:?}", paper.title());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(accession = %accession))]
    pub async fn fetch_by_accession(&self, accession: &str) -> Result<Option<SearchResult>> {
        let url = self.search_url(accession);

        debug!(url = %url, "Making Europe PMC search request");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search request failed with status: {}", status);
            return Err(LitQueryError::ApiError {
                status: status.as_u16(),
                message: format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            });
        }

        let body = response.text().await?;
        let search_response: SearchResponse = serde_json::from_str(&body)?;

        info!(
            hit_count = search_response.hit_count.unwrap_or_default(),
            results = search_response.result_list.result.len(),
            "Search completed"
        );

        Ok(search_response.into_first_result())
    }

    fn search_url(&self, accession: &str) -> String {
        let query = self
            .config
            .build_search_params(accession)
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.base_url, query)
    }
}

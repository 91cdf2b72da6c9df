//! Shared helpers for Europe PMC integration tests

#![allow(dead_code)]

use genome_lit_query::{ClientConfig, EuropePmcClient};
use serde_json::{Value, json};

/// Accession of the Aegilops tauschii (wheat D genome) draft assembly
pub const WHEAT_ACCESSION: &str = "GCA_000355885.1";

/// Path the mocked search endpoint is mounted on
pub const SEARCH_PATH: &str = "/europepmc/webservices/rest/search";

/// Client pointed at a mock server's search path
pub fn create_mock_client(server_uri: &str) -> EuropePmcClient {
    let config = ClientConfig::new()
        .with_base_url(format!("{}{}", server_uri, SEARCH_PATH))
        .with_user_agent("genome-lit-query-tests");

    EuropePmcClient::with_config(config).expect("client should build")
}

/// Europe PMC search envelope around `results`
pub fn search_response(results: Vec<Value>) -> Value {
    json!({
        "version": "6.9",
        "hitCount": results.len(),
        "request": {"queryString": format!("\"{}\"", WHEAT_ACCESSION), "resultType": "core"},
        "resultList": {"result": results}
    })
}

/// Single-hit record used across the end-to-end tests
pub fn wheat_paper() -> Value {
    json!({
        "id": "23535592",
        "source": "MED",
        "pmid": "23535592",
        "pmcid": "PMC123",
        "title": "Wheat genome",
        "abstractText": "...diploid...",
        "journalTitle": "Nature"
    })
}

#[cfg(feature = "integration-tests")]
pub mod integration_test_utils {
    use super::*;
    use std::time::Duration;

    /// Requires both the integration-tests feature and GENOME_LIT_REAL_API_TESTS
    pub fn should_run_real_api_tests() -> bool {
        std::env::var("GENOME_LIT_REAL_API_TESTS").is_ok()
    }

    pub fn create_real_client() -> EuropePmcClient {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(30))
            .with_user_agent("genome-lit-query-integration-tests");
        EuropePmcClient::with_config(config).expect("client should build")
    }
}

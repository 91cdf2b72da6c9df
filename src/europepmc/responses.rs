use serde::Deserialize;

use super::models::SearchResult;

// Europe PMC search envelope: {"resultList": {"result": [...]}}
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default, rename = "hitCount")]
    pub hit_count: Option<u64>,
    #[serde(default, rename = "resultList")]
    pub result_list: ResultList,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResultList {
    #[serde(default)]
    pub result: Vec<SearchResult>,
}

impl SearchResponse {
    /// First result; an empty record counts as no result
    pub fn into_first_result(self) -> Option<SearchResult> {
        self.result_list
            .result
            .into_iter()
            .next()
            .filter(|first| !first.is_empty())
    }
}

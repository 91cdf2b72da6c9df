use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::{LitQueryError, Result};
use crate::europepmc::SearchResult;
use crate::extract::ExtractedMetadata;

/// Final record printed for an accession
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub accession: String,
    pub paper_title: Value,
    pub pmcid: Value,
    pub extracted_metadata: ExtractedMetadata,
}

impl OutputRecord {
    pub fn new(accession: &str, paper: &SearchResult, extracted_metadata: ExtractedMetadata) -> Self {
        Self {
            accession: accession.to_string(),
            paper_title: paper.title_value(),
            pmcid: paper.pmcid_or_default(),
            extracted_metadata,
        }
    }

    /// Pretty JSON with 4-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf)
            .map_err(|e| LitQueryError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

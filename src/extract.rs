//! Metadata extraction from abstract text
//!
//! Only a placeholder extractor exists. It reports fixed values whatever the
//! text says; [`MetadataExtractor`] is where a real extraction stage (an LLM
//! call, for instance) would plug in.

use serde::{Deserialize, Serialize};

/// Value reported for fields the placeholder pretends to detect
pub const MOCK_DETECTED: &str = "Detected via AI (Mock)";

/// Value reported as the extraction source
pub const ABSTRACT_ANALYSIS: &str = "Abstract Analysis";

/// Genome metadata pulled from a paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub ploidy: String,
    pub chromosome_count: String,
    pub extraction_source: String,
}

/// Turns abstract text into [`ExtractedMetadata`]
pub trait MetadataExtractor {
    fn extract(&self, text: &str) -> ExtractedMetadata;
}

/// Placeholder extractor returning constants
#[derive(Debug, Clone, Copy, Default)]
pub struct MockExtractor;

impl MetadataExtractor for MockExtractor {
    fn extract(&self, text: &str) -> ExtractedMetadata {
        extract_metadata_stub(text)
    }
}

/// Placeholder extraction; `_text` is never inspected
///
/// # Example
///
/// ```
/// use genome_lit_query::extract::extract_metadata_stub;
///
/// let metadata = extract_metadata_stub("The organism is a diploid with 20 chromosomes.");
/// assert_eq!(metadata.ploidy, "Detected via AI (Mock)");
/// ```
pub fn extract_metadata_stub(_text: &str) -> ExtractedMetadata {
    ExtractedMetadata {
        ploidy: MOCK_DETECTED.to_string(),
        chromosome_count: MOCK_DETECTED.to_string(),
        extraction_source: ABSTRACT_ANALYSIS.to_string(),
    }
}

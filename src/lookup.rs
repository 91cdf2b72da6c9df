//! Accession lookup: fetch, extract, report

use std::io::Write;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::europepmc::EuropePmcClient;
use crate::extract::MetadataExtractor;
use crate::output::OutputRecord;

/// Shown in the progress line when a paper has no title
pub const UNTITLED: &str = "(untitled)";

/// Result of looking up one accession
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(OutputRecord),
    NotFound,
}

/// Look up `accession` and write the progress lines and record to `out`
///
/// A fetch error is returned as-is after the first progress line; nothing
/// else is written in that case. When the search comes back empty the
/// extractor is never called.
pub async fn run_lookup<E, W>(
    client: &EuropePmcClient,
    extractor: &E,
    accession: &str,
    out: &mut W,
) -> Result<LookupOutcome>
where
    E: MetadataExtractor + ?Sized,
    W: Write,
{
    writeln!(out, "[*] Searching Europe PMC for {accession}...")?;

    let Some(paper) = client.fetch_by_accession(accession).await? else {
        info!(accession = %accession, "No papers found");
        writeln!(out, "[-] No matching papers found for this accession.")?;
        return Ok(LookupOutcome::NotFound);
    };

    let title = display_field(&paper.title_value(), UNTITLED);
    let pmcid = display_field(&paper.pmcid_or_default(), "null");
    writeln!(out, "[+] Found Paper: {title} (PMCID: {pmcid})")?;

    debug!(has_abstract = paper.contains_key("abstractText"), "Running extraction");
    let metadata = extractor.extract(&paper.abstract_or_default());
    let record = OutputRecord::new(accession, &paper, metadata);

    writeln!(out, "\n[!] Structured Output:")?;
    writeln!(out, "{}", record.to_pretty_json()?)?;

    Ok(LookupOutcome::Found(record))
}

// Strings print bare, null prints `null_text`, anything else as JSON
fn display_field(value: &Value, null_text: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => null_text.to_string(),
        other => other.to_string(),
    }
}

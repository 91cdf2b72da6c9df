//! # Genome Literature Query
//!
//! Finds the paper behind a genome assembly accession on Europe PMC and
//! turns it into a small metadata record.
//!
//! ## Features
//!
//! - **Europe PMC Search**: exact-phrase search for an accession, first hit only
//! - **Extraction Seam**: [`MetadataExtractor`] with a placeholder implementation
//! - **Structured Output**: [`OutputRecord`] rendered as 4-space pretty JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use genome_lit_query::{EuropePmcClient, MockExtractor, run_lookup};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EuropePmcClient::new()?;
//!     let mut stdout = std::io::stdout();
//!     run_lookup(&client, &MockExtractor, "GCA_000355885.1", &mut stdout).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod europepmc;
pub mod extract;
pub mod lookup;
pub mod output;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{LitQueryError, Result};
pub use europepmc::{EuropePmcClient, SearchResult};
pub use extract::{ExtractedMetadata, MetadataExtractor, MockExtractor, extract_metadata_stub};
pub use lookup::{LookupOutcome, run_lookup};
pub use output::OutputRecord;

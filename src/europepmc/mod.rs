//! Europe PMC search client
//!
//! Looks up papers by exact-phrase search against the Europe PMC REST API.

pub mod client;
pub mod models;
pub(crate) mod responses;

pub use client::EuropePmcClient;
pub use models::{NO_ABSTRACT, NO_PMCID, SearchResult};

//! Conversion of the source registry's model list into the target listing.
//!
//! Decoding is all-or-nothing; the per-entry transform never fails and keeps
//! the source order.

mod family;
mod size;
mod source;
mod target;
mod transform;

pub use family::{canonical_family, normalize_family};
pub use size::parse_size;
pub use source::{SourceConfig, SourceModel};
pub use target::{TargetCollection, TargetDetails, TargetModel};
pub use transform::{convert_model, format_timestamp, strip_digest_prefix, ModelIdentity};

use std::time::Duration;

use tracing::info;

use crate::error::Result;
use crate::fetch::Fetcher;

/// Parse a raw registry response into source entries.
pub fn decode(raw: &[u8]) -> Result<Vec<SourceModel>> {
    let models: Vec<SourceModel> = serde_json::from_slice(raw)?;
    Ok(models)
}

/// Convert every source entry, one target entry each, same order.
pub fn transform_all(models: &[SourceModel]) -> TargetCollection {
    TargetCollection {
        models: models.iter().map(convert_model).collect(),
    }
}

/// Convert pre-supplied registry bytes (offline mode).
pub fn convert_bytes(raw: &[u8]) -> Result<TargetCollection> {
    let models = decode(raw)?;
    info!("Found {} models in registry response", models.len());
    Ok(transform_all(&models))
}

/// Fetches a registry listing and converts it
pub struct Converter {
    fetcher: Fetcher,
}

impl Converter {
    /// Create a converter whose registry requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(timeout)?,
        })
    }

    /// Wrap an existing fetcher, e.g. one built around a custom client
    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch and decode the listing without converting it
    pub fn fetch(&self, url: &str) -> Result<Vec<SourceModel>> {
        let raw = self.fetcher.fetch(url)?;
        decode(&raw)
    }

    /// Fetch the listing at `url` and convert it.
    pub fn convert_url(&self, url: &str) -> Result<TargetCollection> {
        let raw = self.fetcher.fetch(url)?;
        convert_bytes(&raw)
    }
}

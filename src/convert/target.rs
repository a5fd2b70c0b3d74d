use serde::{Deserialize, Serialize};

/// Envelope of the target listing: `{"models": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetCollection {
    /// Converted entries, in the order of the source list
    pub models: Vec<TargetModel>,
}

/// One entry of the target listing.
///
/// Field order here is the key order of the encoded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetModel {
    /// Display name, the first source tag or the digest
    pub name: String,
    /// Reference name, always equal to `name`
    pub model: String,
    /// RFC3339 timestamp derived from the source creation time
    pub modified_at: String,
    /// Size on disk in bytes
    pub size: u64,
    /// Content hash without its algorithm prefix
    pub digest: String,
    pub details: TargetDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDetails {
    /// Always empty; the source registry does not track lineage
    pub parent_model: String,
    pub format: String,
    /// Canonical architecture family
    pub family: String,
    /// Single-element list holding `family`
    pub families: Vec<String>,
    pub parameter_size: String,
    pub quantization_level: String,
}

impl TargetCollection {
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

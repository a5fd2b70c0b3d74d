use chrono::{DateTime, Local, SecondsFormat, Utc};
use tracing::warn;

use super::family::normalize_family;
use super::size::parse_size;
use super::source::SourceModel;
use super::target::{TargetDetails, TargetModel};

/// How a source entry is named in the target listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelIdentity {
    /// The entry carries a tag; the first one is canonical
    Named(String),
    /// Untagged entry, referred to by its digest
    Anonymous(String),
}

impl ModelIdentity {
    /// Decide the identity of a source entry once, up front.
    ///
    /// Only an empty first tag counts as no tag; any other first tag is used
    /// verbatim. An anonymous entry whose id is only an algorithm prefix
    /// (`"sha256:"`) keeps the raw id so the name is not empty.
    pub fn resolve(model: &SourceModel, digest: &str) -> Self {
        match model.tags.first() {
            Some(tag) if !tag.is_empty() => ModelIdentity::Named(tag.clone()),
            _ if !digest.is_empty() => ModelIdentity::Anonymous(digest.to_string()),
            _ => ModelIdentity::Anonymous(model.id.clone()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ModelIdentity::Named(name) | ModelIdentity::Anonymous(name) => name,
        }
    }
}

/// Strip the `"<algorithm>:"` prefix from a content id.
///
/// Only the first colon-delimited segment is treated as the algorithm tag.
pub fn strip_digest_prefix(id: &str) -> &str {
    id.split_once(':').map_or(id, |(_, digest)| digest)
}

/// Render a Unix timestamp as RFC3339 in the local timezone.
///
/// Timestamps chrono cannot represent fall back to the Unix epoch.
pub fn format_timestamp(secs: i64) -> String {
    let utc = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_else(|| {
        warn!("Timestamp {} is out of range, using the Unix epoch", secs);
        DateTime::<Utc>::default()
    });
    utc.with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Converts a single source entry into its target form
pub fn convert_model(model: &SourceModel) -> TargetModel {
    let digest = strip_digest_prefix(&model.id);
    let identity = ModelIdentity::resolve(model, digest);
    let family = normalize_family(&model.config.architecture);

    TargetModel {
        name: identity.name().to_string(),
        model: identity.name().to_string(),
        modified_at: format_timestamp(model.created),
        size: parse_size(&model.config.size),
        digest: digest.to_string(),
        details: TargetDetails {
            parent_model: String::new(),
            format: model.config.format.clone(),
            families: vec![family.clone()],
            family,
            parameter_size: model.config.parameters.clone(),
            quantization_level: model.config.quantization.clone(),
        },
    }
}

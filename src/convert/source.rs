use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the source registry's model list (`GET /models`).
///
/// Only `id` is mandatory. Missing or `null` tags, timestamps and config
/// fields fall back to their empty values so that sparse entries still
/// convert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceModel {
    /// Content-addressed identifier, e.g. `sha256:<hex>`
    pub id: String,
    /// Human-assigned names; the first one is canonical
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Creation time in seconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: SourceConfig,
}

/// Descriptive metadata attached to a source entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File format (e.g. "gguf")
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    /// Quantization level (e.g. "F16", "Q4_K_M")
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantization: String,
    /// Human-readable parameter count (e.g. "361.82 M")
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: String,
    /// Architecture family identifier (e.g. "llama")
    #[serde(default, deserialize_with = "null_as_default")]
    pub architecture: String,
    /// Human-readable size on disk (e.g. "690.24 MiB")
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_entry() {
        let model: SourceModel = serde_json::from_str(
            r#"{
                "id": "sha256:test1",
                "tags": ["model1", "model1:latest"],
                "created": 1745698622,
                "config": {
                    "format": "gguf",
                    "quantization": "F16",
                    "parameters": "1B",
                    "architecture": "llama",
                    "size": "1 GiB"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(model.id, "sha256:test1");
        assert_eq!(model.tags, vec!["model1", "model1:latest"]);
        assert_eq!(model.created, 1745698622);
        assert_eq!(model.config.parameters, "1B");
        assert_eq!(model.config.size, "1 GiB");
    }

    #[test]
    fn test_sparse_entry_uses_empty_values() {
        let model: SourceModel =
            serde_json::from_str(r#"{"id": "abc", "tags": null, "config": {"format": null}}"#)
                .unwrap();

        assert!(model.tags.is_empty());
        assert_eq!(model.created, 0);
        assert_eq!(model.config, SourceConfig::default());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<SourceModel>(r#"{"tags": ["x"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mistyped_field_is_rejected() {
        let result = serde_json::from_str::<SourceModel>(r#"{"id": "abc", "created": "yesterday"}"#);
        assert!(result.is_err());
    }
}

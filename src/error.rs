use std::io;

use thiserror::Error;

/// Failures that abort a conversion run.
///
/// Every variant is terminal: nothing is retried and no output is written.
/// Problems with a single field (an odd size string, an unknown architecture)
/// never show up here; they resolve to fallback values during the transform.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The registry could not be reached or the body could not be read.
    #[error("failed to fetch from registry: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered with something other than 200.
    #[error("registry at {url} returned status: {status}")]
    UpstreamStatus { status: u16, url: String },

    /// The source document is not a well-formed model list.
    #[error("failed to parse registry JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The converted listing could not be written to its sink.
    #[error("failed to write {target}: {source}")]
    Persist {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl BridgeError {
    pub(crate) fn persist(target: impl Into<String>, source: impl Into<io::Error>) -> Self {
        BridgeError::Persist {
            target: target.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_carries_code() {
        let err = BridgeError::UpstreamStatus {
            status: 503,
            url: "http://localhost:12434/models".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "registry at http://localhost:12434/models returned status: 503"
        );
    }

    #[test]
    fn test_persist_keeps_io_source() {
        let err = BridgeError::persist(
            "models.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("failed to write models.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

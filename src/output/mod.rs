//! Encoding of the converted listing and the sinks it is written to.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::convert::TargetCollection;
use crate::error::{BridgeError, Result};

/// Where the encoded listing goes. Exactly one sink per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// No path means standard output
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputSink::File(path),
            None => OutputSink::Stdout,
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Stdout => write!(f, "<stdout>"),
            OutputSink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Pretty-printed JSON, two-space indent, keys in struct field order
pub fn encode(collection: &TargetCollection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(collection)
}

/// Write the listing to `sink`
pub fn write(collection: &TargetCollection, sink: &OutputSink) -> Result<()> {
    match sink {
        OutputSink::Stdout => write_to(collection, io::stdout().lock(), &sink.to_string()),
        OutputSink::File(path) => save(collection, path),
    }
}

/// Encode the listing into any writer, followed by a newline
pub fn write_to<W: Write>(collection: &TargetCollection, mut writer: W, target: &str) -> Result<()> {
    let json = encode(collection).map_err(|e| BridgeError::persist(target, e))?;
    writeln!(writer, "{}", json)
        .and_then(|_| writer.flush())
        .map_err(|e| BridgeError::persist(target, e))
}

/// Save the listing to `path`.
///
/// The JSON is written to a temporary file next to `path` and renamed over
/// it, so a failed write leaves any existing file untouched.
fn save(collection: &TargetCollection, path: &Path) -> Result<()> {
    let target = path.display().to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| BridgeError::persist(&target, e))?;
    write_to(collection, &mut file, &target)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(Permissions::from_mode(0o644))
            .map_err(|e| BridgeError::persist(&target, e))?;
    }

    file.persist(path)
        .map_err(|e| BridgeError::persist(&target, e.error))?;

    info!("Saved {} models to {}", collection.len(), target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{TargetDetails, TargetModel};

    fn sample() -> TargetCollection {
        TargetCollection {
            models: vec![TargetModel {
                name: "test-model".to_string(),
                model: "test-model".to_string(),
                modified_at: "2025-01-01T00:00:00Z".to_string(),
                size: 1024,
                digest: "test-digest".to_string(),
                details: TargetDetails {
                    parent_model: String::new(),
                    format: "gguf".to_string(),
                    family: "llama".to_string(),
                    families: vec!["llama".to_string()],
                    parameter_size: "1B".to_string(),
                    quantization_level: "F16".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_sink_from_path() {
        assert_eq!(OutputSink::from_path(None), OutputSink::Stdout);
        assert_eq!(
            OutputSink::from_path(Some(PathBuf::from("out.json"))),
            OutputSink::File(PathBuf::from("out.json"))
        );
        assert_eq!(OutputSink::Stdout.to_string(), "<stdout>");
    }

    #[test]
    fn test_encode_key_order_and_indent() {
        let json = encode(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"models\": [\n    {\n      \"name\": \"test-model\""));

        let keys = [
            "\"name\"",
            "\"model\"",
            "\"modified_at\"",
            "\"size\"",
            "\"digest\"",
            "\"details\"",
            "\"parent_model\"",
            "\"format\"",
            "\"family\"",
            "\"families\"",
            "\"parameter_size\"",
            "\"quantization_level\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_collection_encodes_empty_list() {
        let json = encode(&TargetCollection::default()).unwrap();
        assert_eq!(json, "{\n  \"models\": []\n}");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buffer = Vec::new();
        write_to(&sample(), &mut buffer, "buffer").unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: TargetCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stdout_write_failure_names_stdout() {
        let sink = OutputSink::Stdout;
        let err = write_to(&sample(), ClosedPipe, &sink.to_string()).unwrap_err();

        match &err {
            BridgeError::Persist { target, .. } => assert_eq!(target, "<stdout>"),
            other => panic!("expected persist error, got {:?}", other),
        }
        assert!(err.to_string().contains("<stdout>"));
    }

    #[test]
    fn test_save_creates_and_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        std::fs::write(&path, "stale").unwrap();

        write(&sample(), &OutputSink::File(path.clone())).unwrap();

        let parsed: TargetCollection =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.models[0].name, "test-model");
        // Only the destination remains, no stray temporary files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does/not/exist/models.json");

        let result = write(&sample(), &OutputSink::File(path.clone()));
        assert!(matches!(result, Err(BridgeError::Persist { .. })));
        assert!(!path.exists());
    }
}

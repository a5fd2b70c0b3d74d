use std::collections::HashMap;

use once_cell::sync::Lazy;

// When adding a new family variant, add its lowercase architecture name
// below next to the canonical family it belongs to.

/// Lowercase architecture identifier -> canonical family name
static FAMILY_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for arch in ["llama", "llama2", "llama3"] {
        table.insert(arch, "llama");
    }
    for arch in ["phi3", "phi4"] {
        table.insert(arch, "phi3");
    }
    for arch in ["qwen", "qwen3"] {
        table.insert(arch, "qwen");
    }

    table
});

/// Look up the canonical family of an architecture, ignoring case.
pub fn canonical_family(architecture: &str) -> Option<&'static str> {
    FAMILY_TABLE
        .get(architecture.to_lowercase().as_str())
        .copied()
}

/// Maps an architecture to the family reported in the target listing.
///
/// Architectures missing from the table pass through exactly as supplied.
pub fn normalize_family(architecture: &str) -> String {
    canonical_family(architecture)
        .map(str::to_string)
        .unwrap_or_else(|| architecture.to_string())
}

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parsed `package-lock.json`. Only the `packages` map matters here;
/// everything inside each entry rides along as raw JSON. `preserve_order`
/// keeps the map in the file's own key order.
#[derive(Debug, Default, Deserialize)]
pub struct PackageLock {
    // lockfileVersion, name etc. are not interessting
    #[serde(default)]
    pub packages: Map<String, Value>,
}

impl PackageLock {
    pub fn parse(content: &str) -> Result<PackageLock, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// `version` of a single entry. Link and workspace stub entries have no
/// version field; those compare as the empty string.
pub fn entry_version(entry: &Value) -> &str {
    entry.get("version").and_then(Value::as_str).unwrap_or("")
}

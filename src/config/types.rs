use serde::Deserialize;

/// On-disk configuration. Every field is optional; values supplied on the
/// command line or via environment win over the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub count: Option<u64>,
    pub timeout_ms: Option<u64>,
}

//! Gateway config: YAML on disk, strict schema, validated before use.
//!
//! Resolution order for the file: explicit path, then `$MEDIAGUARD_CONFIG`,
//! then `mediaguard.yaml` in the working directory.

pub mod schema;

use std::path::{Path, PathBuf};

use mediaguard_core::error::{MediaGuardError, Result};

pub use schema::{GatewayConfig, GatewaySection, IdentityConfig, MediaSection};

pub const CONFIG_ENV: &str = "MEDIAGUARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "mediaguard.yaml";

/// Config file location when none is given explicitly.
pub fn default_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|e| {
        MediaGuardError::Internal(format!("cannot read config {}: {e}", path.display()))
    })?;
    load_from_str(&yaml).map_err(|e| match e {
        MediaGuardError::BadRequest(msg) => {
            MediaGuardError::BadRequest(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Parse and validate. Unknown keys anywhere are rejected.
pub fn load_from_str(yaml: &str) -> Result<GatewayConfig> {
    let cfg = serde_yaml::from_str::<GatewayConfig>(yaml)
        .map_err(|e| MediaGuardError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate().map(|()| cfg)
}

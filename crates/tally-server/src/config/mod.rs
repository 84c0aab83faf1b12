//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::{Result, ServerError};

pub use schema::{ServerSection, TallyConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<TallyConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        ServerError::InvalidConfig(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<TallyConfig> {
    let cfg: TallyConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config the process should run with.
///
/// `TALLY_CONFIG` wins when set (the file must exist). Otherwise `tally.yaml`
/// in the working directory is used if present, else built-in defaults.
pub fn load_default() -> Result<TallyConfig> {
    if let Ok(path) = std::env::var("TALLY_CONFIG") {
        tracing::info!(%path, "loading config from TALLY_CONFIG");
        return load_from_file(path);
    }
    if Path::new("tally.yaml").exists() {
        return load_from_file("tally.yaml");
    }
    tracing::info!("no config file found, using defaults");
    Ok(TallyConfig::default())
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration. All fields optional; CLI flags win over config
/// values, config values win over defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroveConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("grove.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("grove.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<GroveConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: GroveConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &GroveConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

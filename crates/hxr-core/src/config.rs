use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/hxr/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HxrConfig {
    /// Root directory for saved exchanges (relative paths resolve against the cwd).
    pub output_dir: PathBuf,
    /// Write `<digest>.headers` next to each body. Also changes the digest.
    pub save_headers: bool,
    /// Index file name inside `output_dir`; omit to disable the index.
    /// It shares the directory with the `<host>/` folders, so the default
    /// carries an extension to stay clear of a bare host such as `index`.
    #[serde(default)]
    pub index_file: Option<String>,
}

impl Default for HxrConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            save_headers: true,
            index_file: Some("index.txt".to_string()),
        }
    }
}

impl HxrConfig {
    /// Full index path for a given output root, if the index is enabled.
    pub fn index_path(&self, output_dir: &Path) -> Option<PathBuf> {
        self.index_file.as_ref().map(|name| output_dir.join(name))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hxr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HxrConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<HxrConfig> {
    if !path.exists() {
        let default_cfg = HxrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: HxrConfig = toml::from_str(&data)?;
    Ok(cfg)
}

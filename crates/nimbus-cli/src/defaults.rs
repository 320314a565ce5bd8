use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings applied to `animate` flags that were not given explicitly.
/// Loaded from a TOML file via `--config`; see the `config` subcommand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Defaults {
    pub satellite: String,
    pub area: String,
    /// Parameter code; omit to use the satellite's preferred parameter.
    pub param: Option<String>,
    pub output: PathBuf,
    /// Frame delay in hundredths of a second.
    pub delay: u16,
    pub threads: usize,
    pub repeat: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            satellite: "GOES".into(),
            area: "BR".into(),
            param: None,
            output: PathBuf::from("out.gif"),
            delay: 5,
            threads: 8,
            repeat: true,
        }
    }
}

impl Defaults {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).context("Invalid config file")
    }
}

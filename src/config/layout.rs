use crate::layout::{LayoutOptions, WindowSizing};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

/// Input of the `window_layout` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutToolConfig {
    /// Array shape, axes ordered by `layout.dim_order`.
    pub shape: Vec<usize>,
    pub sizing: WindowSizing,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<LayoutToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: LayoutToolConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

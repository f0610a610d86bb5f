use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

pub const DEFAULT_TEMPLATE_PATH: &str = "prompts/sales_context_analysis_prompt.txt";

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DEALSENSE_CONFIG";
/// Env var overriding `template_path` after the file is loaded.
pub const PROMPT_PATH_ENV: &str = "DEALSENSE_PROMPT_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Prompt template file. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
        }
    }
}

impl ContextConfig {
    /// Locate and load the effective configuration.
    ///
    /// Order: the file named by `DEALSENSE_CONFIG` (must exist), else
    /// `<config_dir>/dealsense/config.json` when present, else defaults.
    /// `DEALSENSE_PROMPT_PATH` then overrides the template path.
    pub fn resolve() -> Result<Self, ContextError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => load_config(Path::new(&path))?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_config(&path)?,
                _ => Self::default(),
            },
        };

        if let Some(template_path) = std::env::var_os(PROMPT_PATH_ENV) {
            config.template_path = PathBuf::from(template_path);
        }

        Ok(config)
    }
}

/// `<config_dir>/dealsense/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("dealsense").join("config.json"))
}

pub fn load_config(path: &Path) -> Result<ContextConfig, ContextError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ContextError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ContextConfig = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "context config loaded");
    Ok(config)
}

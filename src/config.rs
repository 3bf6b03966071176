//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{
    validate_weight, GraphError, GraphResult, Position, DEFAULT_ADJACENCY_KEY,
    DEFAULT_LAYOUT_ORIGIN, DEFAULT_LAYOUT_SPACING, DEFAULT_POSITION, DEFAULT_WEIGHT,
};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "GSTEP_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const LOCAL_CONFIG_FILE: &str = "gstep.toml";

/// Where imported nodes are placed: a horizontal line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_layout_origin")]
    pub origin: Position,
    #[serde(default = "default_layout_spacing")]
    pub spacing: f64,
}

impl LayoutConfig {
    /// Position of the `index`-th imported node (0-based).
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(self.origin.x + index as f64 * self.spacing, self.origin.y)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: default_layout_origin(),
            spacing: default_layout_spacing(),
        }
    }
}

/// Settings shared by the library services and the `gstep` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperConfig {
    /// Top-level key of the adjacency-list document.
    #[serde(default = "default_adjacency_key")]
    pub adjacency_key: String,
    /// Weight used for imported edges and edges added without one.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
    /// Position of nodes added without coordinates.
    #[serde(default = "default_position")]
    pub default_position: Position,
    /// Import layout.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Pause between visit events during CLI playback, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Log level when `--verbose` and `RUST_LOG` are absent.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_adjacency_key() -> String {
    DEFAULT_ADJACENCY_KEY.to_string()
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_position() -> Position {
    DEFAULT_POSITION
}

fn default_layout_origin() -> Position {
    DEFAULT_LAYOUT_ORIGIN
}

fn default_layout_spacing() -> f64 {
    DEFAULT_LAYOUT_SPACING
}

fn default_step_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            adjacency_key: default_adjacency_key(),
            default_weight: default_weight(),
            default_position: default_position(),
            layout: LayoutConfig::default(),
            step_delay_ms: default_step_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl StepperConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> GraphResult<()> {
        if self.adjacency_key.is_empty() {
            return Err(GraphError::Config("adjacency_key must not be empty".into()));
        }
        validate_weight(self.default_weight)
            .map_err(|_| GraphError::Config("default_weight must be positive".into()))?;
        Ok(())
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<StepperConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to read config file {}: {e}",
                path.display()
            ),
        ))
    })?;
    StepperConfig::from_toml(&content)
}

/// Resolve the config file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. GSTEP_CONFIG environment variable
/// 3. gstep.toml in current directory
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    local.exists().then_some(local)
}

/// Load the resolved config, or defaults when no file is found.
pub fn resolve_config(explicit: Option<&Path>) -> GraphResult<StepperConfig> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(StepperConfig::default()),
    }
}

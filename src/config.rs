use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_PATH: &str = "kaelion.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,
    #[serde(default = "OutputConfig::default_dpi")]
    pub dpi: u32,
}

impl OutputConfig {
    /// Largest accepted resolution; figure 1 is already 16800 px wide here.
    pub const MAX_DPI: u32 = 1200;

    fn default_dir() -> PathBuf {
        PathBuf::from("target/plots/kaelion")
    }
    fn default_dpi() -> u32 {
        150
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            dpi: Self::default_dpi(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

impl RenderConfig {
    /// Read `path` if it exists. A missing file yields defaults and is not
    /// created; unreadable or invalid files are reported and ignored.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            debug!("no config at {path}; using defaults");
            return Self::default();
        }
        let cfg = match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str::<RenderConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse config {path}: {err}. Using defaults.");
                    return Self::default();
                }
            },
            Err(err) => {
                warn!("Failed to read config {path}: {err}. Using defaults.");
                return Self::default();
            }
        };
        let dpi = cfg.output.dpi;
        if !(1..=OutputConfig::MAX_DPI).contains(&dpi) {
            warn!(
                "Config {path} sets dpi = {dpi} outside 1..={}; using {}",
                OutputConfig::MAX_DPI,
                OutputConfig::default_dpi()
            );
            return Self {
                output: OutputConfig {
                    dpi: OutputConfig::default_dpi(),
                    ..cfg.output
                },
            };
        }
        cfg
    }

    /// Command-line overrides win over file values.
    pub fn with_out_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output.dir = dir;
        }
        self
    }
}

use crate::models::status::{MemoryMode, Metric};
use crate::ui::powerline::DisplayOptions;
use crate::ui::theme::{ThemeVariant, Thresholds};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Mount point to report on
    pub mount: PathBuf,
    /// Segment body: "used-total", "free" or "percent"
    pub mode: MemoryMode,
    /// What the first number tracks: "available" or "used"
    pub metric: Metric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub colors:          bool,
    pub powerline_left:  bool,
    pub powerline_right: bool,
    /// Another powerline segment sits next to this one.
    pub segments_left:   bool,
    /// tmux colour index of that neighbouring segment
    pub left_color:      i16,
    pub theme:           ThemeVariant,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mount:  PathBuf::from("/"),
            mode:   MemoryMode::default(),
            metric: Metric::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors:          false,
            powerline_left:  false,
            powerline_right: false,
            segments_left:   false,
            left_color:      0,
            theme:           ThemeVariant::Default,
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            use_colors:          self.colors,
            use_powerline_left:  self.powerline_left,
            use_powerline_right: self.powerline_right,
            segments_to_left:    self.segments_left,
            left_color:          self.left_color,
        }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    /// Load the user config, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        match Config::config_path() {
            Some(path) => load_or_default(&path),
            None       => {
                debug!("no config dir, using default config");
                Config::default()
            }
        }
    }

    /// Load an explicitly named config file. Errors are not swallowed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Config = toml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tmux-disk").join("tmux-disk.toml"))
    }
}

fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using default config");
        // Write defaults on first run (best-effort)
        if let Err(e) = write_defaults(path) {
            warn!(error = %e, "could not write default config");
        }
        return Config::default();
    }
    match Config::load_from(path) {
        Ok(c)  => c,
        Err(e) => {
            // Present but unparsable: leave it for the user to fix.
            warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring config, using defaults");
            Config::default()
        }
    }
}

fn write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# tmux-disk configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}

use serde::{Deserialize, Serialize};
use tracing::warn;

// ── Theme variant selector ──────────────────────────────────────────────

/// Unknown names fall back to `Default`, from the CLI and the config file alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThemeVariant {
    #[default]
    Default,
    Dracula,
    Gruvbox,
    Nord,
}

impl ThemeVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dracula => "dracula",
            Self::Gruvbox => "gruvbox",
            Self::Nord    => "nord",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::Dracula,
            "gruvbox" => Self::Gruvbox,
            "nord"    => Self::Nord,
            "default" => Self::Default,
            other     => {
                warn!(theme = other, "unknown theme, using default");
                Self::Default
            }
        }
    }
}

impl From<String> for ThemeVariant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

// ── Lookup table entry ──────────────────────────────────────────────────

/// One tmux style: foreground on a usage-graded background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutEntry {
    pub fg: &'static str,
    pub bg: &'static str,
}

impl LutEntry {
    /// `#[fg=..,bg=..]`
    pub fn marker(&self) -> String {
        format!("#[fg={},bg={}]", self.fg, self.bg)
    }

    /// The background drawn as foreground over the terminal default, for
    /// powerline arrows entering or leaving the segment.
    pub fn edge(&self) -> String {
        format!("#[fg={},bg=default]", self.bg)
    }
}

/// Percent cut-offs for the gradient steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub mid_pct:  u8,
    pub high_pct: u8,
    pub crit_pct: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { mid_pct: 50, high_pct: 75, crit_pct: 95 }
    }
}

// ── Palette ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Palette {
    pub fg:   &'static str,
    pub low:  &'static str,
    pub mid:  &'static str,
    pub high: &'static str,
    pub crit: &'static str,
    pub thresholds: Thresholds,
}

impl Palette {
    pub fn for_variant(v: ThemeVariant, thresholds: Thresholds) -> Self {
        let (fg, low, mid, high, crit) = match v {
            ThemeVariant::Default => ("black", "green", "yellow", "brightred", "red"),
            // https://draculatheme.com/
            ThemeVariant::Dracula => ("#282a36", "#50fa7b", "#f1fa8c", "#ffb86c", "#ff5555"),
            // https://github.com/morhetz/gruvbox
            ThemeVariant::Gruvbox => ("#282828", "#b8bb26", "#fabd2f", "#fe8019", "#fb4934"),
            // https://www.nordtheme.com/ (Polar Night on Aurora)
            ThemeVariant::Nord    => ("#2e3440", "#a3be8c", "#ebcb8b", "#d08770", "#bf616a"),
        };
        Self { fg, low, mid, high, crit, thresholds }
    }

    /// Pick the gradient entry for a 0–100 value.
    pub fn entry(&self, pct: usize) -> LutEntry {
        let t = &self.thresholds;
        let bg = if      pct >= t.crit_pct as usize { self.crit }
                 else if pct >= t.high_pct as usize { self.high }
                 else if pct >= t.mid_pct  as usize { self.mid  }
                 else                               { self.low  };
        LutEntry { fg: self.fg, bg }
    }

    /// The full 101-entry table indexed by integer percentage.
    pub fn lut(&self) -> Vec<LutEntry> {
        (0..=100).map(|pct| self.entry(pct)).collect()
    }
}

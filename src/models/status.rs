use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Point-in-time capacity reading for one filesystem, in megabytes.
///
/// `used_mem` carries whatever the query's [`Metric`] selected. With the
/// default `Metric::Available` it holds the space still available to
/// unprivileged users, not the space in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MemoryStatus {
    #[serde(rename = "used_mb")]
    pub used_mem:  f32,
    #[serde(rename = "total_mb")]
    pub total_mem: f32,
}

impl MemoryStatus {
    pub fn new(used_mem: f32, total_mem: f32) -> Self {
        Self { used_mem, total_mem }
    }

    /// `used / total`, or None when there is nothing meaningful to divide by.
    pub fn ratio(&self) -> Option<f32> {
        if !self.total_mem.is_finite() || self.total_mem <= 0.0 { return None; }
        Some(self.used_mem / self.total_mem)
    }

    /// Lookup-table index in `0..=100`.
    pub fn color_index(&self) -> Option<usize> {
        self.ratio().map(|r| ((100.0 * r).floor().max(0.0) as usize).min(100))
    }
}

/// Which quantity the query stores in [`MemoryStatus::used_mem`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Space available to unprivileged users (`f_bavail`).
    #[default]
    Available,
    /// Space in use (`f_blocks - f_bfree`).
    Used,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Available => "available",
            Metric::Used      => "used",
        }
    }
}

/// Display style of the segment body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryMode {
    /// `used/total`, scaled to GB past 10000 MB.
    #[default]
    #[value(name = "used-total")]
    #[serde(rename = "used-total")]
    Default,
    /// Free space (`total - used`) in MB or GB.
    #[value(name = "free")]
    #[serde(rename = "free")]
    FreeMemory,
    /// `used / total` as a percentage.
    #[value(name = "percent")]
    #[serde(rename = "percent")]
    UsagePercentage,
}

impl MemoryMode {
    pub fn label(&self) -> &'static str {
        match self {
            MemoryMode::Default         => "used-total",
            MemoryMode::FreeMemory      => "free",
            MemoryMode::UsagePercentage => "percent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_bounds() {
        for (used, total) in [(0.0, 100.0), (50.0, 100.0), (100.0, 100.0), (1.0, 3.0), (8191.9, 8192.0)] {
            let idx = MemoryStatus::new(used, total).color_index().unwrap();
            assert!(idx <= 100, "index {} out of range for {}/{}", idx, used, total);
        }
        assert_eq!(MemoryStatus::new(2048.0, 8192.0).color_index(), Some(25));
        assert_eq!(MemoryStatus::new(100.0, 100.0).color_index(), Some(100));
    }

    #[test]
    fn test_color_index_clamps_overflow() {
        assert_eq!(MemoryStatus::new(150.0, 100.0).color_index(), Some(100));
        assert_eq!(MemoryStatus::new(-5.0, 100.0).color_index(), Some(0));
    }

    #[test]
    fn test_zero_total_has_no_ratio() {
        assert_eq!(MemoryStatus::new(10.0, 0.0).ratio(), None);
        assert_eq!(MemoryStatus::new(10.0, f32::NAN).color_index(), None);
    }

    #[test]
    fn test_mode_serde_names() {
        #[derive(Deserialize)]
        struct Wrap { mode: MemoryMode, metric: Metric }
        let w: Wrap = toml::from_str("mode = \"percent\"\nmetric = \"used\"").unwrap();
        assert_eq!(w.mode, MemoryMode::UsagePercentage);
        assert_eq!(w.metric, Metric::Used);
        let w: Wrap = toml::from_str("mode = \"used-total\"\nmetric = \"available\"").unwrap();
        assert_eq!(w.mode, MemoryMode::Default);
        assert_eq!(w.metric, Metric::Available);
    }
}

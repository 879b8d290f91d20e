use crate::models::status::{MemoryStatus, Metric};
use crate::util::units::{convert_unit, Unit};
use anyhow::{Context, Result};
use nix::sys::statvfs::statvfs;
use std::path::Path;
use tracing::debug;

/// Raw block counts as reported by statvfs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCounts {
    pub blocks:           u64,
    pub blocks_free:      u64,
    pub blocks_available: u64,
    pub fragment_size:    u64,
}

impl BlockCounts {
    pub fn total_bytes(&self) -> u64 {
        self.blocks.saturating_mul(self.fragment_size)
    }

    pub fn avail_bytes(&self) -> u64 {
        self.blocks_available.saturating_mul(self.fragment_size)
    }

    pub fn used_bytes(&self) -> u64 {
        self.blocks.saturating_sub(self.blocks_free).saturating_mul(self.fragment_size)
    }

    /// Build the status record in megabytes, picking `used_mem` per `metric`.
    pub fn to_status(&self, metric: Metric) -> MemoryStatus {
        let used = match metric {
            Metric::Available => self.avail_bytes(),
            Metric::Used      => self.used_bytes(),
        };
        MemoryStatus::new(
            convert_unit(used as f32, Unit::Megabytes, Unit::Bytes),
            convert_unit(self.total_bytes() as f32, Unit::Megabytes, Unit::Bytes),
        )
    }
}

/// statvfs the given mount point and return its raw block counts.
pub fn read_blocks(mount: &Path) -> Result<BlockCounts> {
    let stat = statvfs(mount)
        .with_context(|| format!("error getting disk space information for {}", mount.display()))?;

    let counts = BlockCounts {
        blocks:           stat.blocks() as u64,
        blocks_free:      stat.blocks_free() as u64,
        blocks_available: stat.blocks_available() as u64,
        fragment_size:    stat.fragment_size() as u64,
    };
    debug!(mount = %mount.display(), ?counts, "statvfs");
    Ok(counts)
}

/// Query `mount` and return its capacity as a [`MemoryStatus`] in megabytes.
pub fn disk_status(mount: &Path, metric: Metric) -> Result<MemoryStatus> {
    let status = read_blocks(mount)?.to_status(metric);
    debug!(used_mem = status.used_mem, total_mem = status.total_mem, metric = metric.label(), "disk status");
    Ok(status)
}

use crate::models::status::{MemoryMode, MemoryStatus};
use crate::ui::powerline::{powerline, Decoration, Direction, DisplayOptions};
use crate::ui::theme::Palette;
use crate::util::units::{convert_unit, Unit};
use anyhow::{bail, Result};
use tracing::debug;

pub const DISK_GLYPH: &str = "🖴 ";

/// Megabyte count past which the used/total view switches to gigabytes.
const GB_THRESHOLD: f32 = 10_000.0;

/// Render the status-bar segment for `status`.
pub fn disk_string(
    status:  &MemoryStatus,
    mode:    MemoryMode,
    opts:    &DisplayOptions,
    palette: &Palette,
) -> Result<String> {
    let Some(color) = status.color_index() else {
        bail!("no filesystem data (total size is {})", status.total_mem);
    };
    let entry = palette.lut()[color];
    let mut out = String::new();

    if opts.use_colors {
        let decoration = Decoration::from_options(opts);
        debug!(?decoration, color, "opening segment");
        decoration.open(&mut out, &entry, opts.left_color);
    }

    out.push_str(DISK_GLYPH);
    out.push_str(&body(status, mode));

    if opts.use_colors {
        if opts.use_powerline_left {
            powerline(&mut out, &entry, Direction::Left, true);
        } else if !opts.use_powerline_right {
            out.push_str("#[fg=default,bg=default]");
        }
    }

    Ok(out)
}

/// Mode-specific text between the glyph and the closing decoration.
fn body(status: &MemoryStatus, mode: MemoryMode) -> String {
    let used  = status.used_mem;
    let total = status.total_mem;

    match mode {
        MemoryMode::FreeMemory => {
            let free = total - used;
            let free_gb = convert_unit(free, Unit::Gigabytes, Unit::Megabytes);
            if free_gb < 1.0 { format!("{:.2}MB", free) }
            else             { format!("{:.2}GB", free_gb) }
        }
        MemoryMode::UsagePercentage => {
            format!("{:.2}%", used / total * 100.0)
        }
        MemoryMode::Default => {
            let to_gb = |mb: f32| convert_unit(mb, Unit::Gigabytes, Unit::Megabytes) as u32;
            if used >= GB_THRESHOLD && total > GB_THRESHOLD {
                format!("{}/{}GB", to_gb(used), to_gb(total))
            } else if used < GB_THRESHOLD && total > GB_THRESHOLD {
                format!("{}MB/{}GB", used as u32, to_gb(total))
            } else {
                format!("{}/{}MB", used as u32, total as u32)
            }
        }
    }
}

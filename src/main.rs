mod collectors;
mod config;
mod models;
mod ui;
mod util;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use config::Config;
use models::status::{MemoryMode, MemoryStatus, Metric};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::powerline::DisplayOptions;
use ui::theme::{Palette, ThemeVariant};

#[derive(Parser, Debug)]
#[command(name = "tmux-disk", about = "Disk usage segment for tmux and other status bars", version = "0.1")]
struct Cli {
    /// Segment body: used-total, free, percent
    #[arg(short, long, value_enum)]
    mode: Option<MemoryMode>,

    /// Mount point to report on
    #[arg(short = 'p', long)]
    mount: Option<PathBuf>,

    /// What the first number tracks: available, used
    #[arg(long, value_enum)]
    metric: Option<Metric>,

    /// Wrap the segment in tmux colour markers
    #[arg(short, long)]
    colors: bool,

    /// Draw a powerline arrow on the left edge
    #[arg(long)]
    powerline_left: bool,

    /// Draw a powerline arrow on the right edge
    #[arg(long)]
    powerline_right: bool,

    /// Another powerline segment sits next to this one
    #[arg(long)]
    segments_left: bool,

    /// tmux colour index of the neighbouring segment
    #[arg(long)]
    left_color: Option<i16>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print a one-shot JSON snapshot and exit
    #[arg(long)]
    json: bool,

    /// Print config file path and effective values, then exit
    #[arg(long)]
    print_config: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Effective settings once CLI flags are laid over the config file.
#[derive(Debug, Clone)]
struct Settings {
    mount:   PathBuf,
    mode:    MemoryMode,
    metric:  Metric,
    options: DisplayOptions,
    theme:   ThemeVariant,
    palette: Palette,
}

impl Settings {
    fn resolve(cli: &Cli, cfg: &Config) -> Self {
        let mut options = cfg.display.options();
        options.use_colors          |= cli.colors;
        options.use_powerline_left  |= cli.powerline_left;
        options.use_powerline_right |= cli.powerline_right;
        options.segments_to_left    |= cli.segments_left;
        if let Some(c) = cli.left_color { options.left_color = c; }

        let theme = cli.theme.as_deref()
            .map(ThemeVariant::from_name)
            .unwrap_or(cfg.display.theme);

        Self {
            mount:   cli.mount.clone().unwrap_or_else(|| cfg.general.mount.clone()),
            mode:    cli.mode.unwrap_or(cfg.general.mode),
            metric:  cli.metric.unwrap_or(cfg.general.metric),
            options,
            theme,
            palette: Palette::for_variant(theme, cfg.thresholds),
        }
    }
}

/// Initialize tracing on stderr; stdout carries only the segment.
///
/// - 0: warn (default)
/// - 1: info (-v)
/// - 2: debug (-vv)
/// - 3+: trace (-vvv)
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Allow RUST_LOG to override if set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "tmux-disk", &mut io::stdout());
        return Ok(());
    }

    let cfg = match &cli.config_file {
        Some(path) => Config::load_from(path)?,
        None       => Config::load(),
    };
    let settings = Settings::resolve(&cli, &cfg);

    if cli.print_config {
        return run_print_config(&cli, &settings);
    }
    if cli.json {
        return run_json_snapshot(&settings);
    }

    let status = collectors::filesystem::disk_status(&settings.mount, settings.metric)?;
    let segment = ui::segment::disk_string(&status, settings.mode, &settings.options, &settings.palette)?;
    println!("{}", segment);
    Ok(())
}

/// One-shot `--json` output.
#[derive(Debug, Serialize)]
struct Snapshot {
    tmux_disk_version: &'static str,
    timestamp:         String,
    /// Lossy so a non-UTF-8 mount name still serializes.
    mount:             String,
    metric:            Metric,
    mode:              MemoryMode,
    #[serde(flatten)]
    status:            MemoryStatus,
    used_hr:           String,
    total_hr:          String,
    usage_pct:         Option<f32>,
    segment:           String,
}

fn json_snapshot(settings: &Settings) -> Result<String> {
    use util::units::fmt_mb;

    let status = collectors::filesystem::disk_status(&settings.mount, settings.metric)?;
    let segment = ui::segment::disk_string(&status, settings.mode, &settings.options, &settings.palette)?;
    info!(mount = %settings.mount.display(), "json snapshot");

    let snapshot = Snapshot {
        tmux_disk_version: "0.1",
        timestamp: chrono::Local::now().to_rfc3339(),
        mount:     settings.mount.to_string_lossy().into_owned(),
        metric:    settings.metric,
        mode:      settings.mode,
        status,
        used_hr:   fmt_mb(status.used_mem),
        total_hr:  fmt_mb(status.total_mem),
        usage_pct: status.ratio().map(|r| r * 100.0),
        segment,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

fn run_json_snapshot(settings: &Settings) -> Result<()> {
    println!("{}", json_snapshot(settings)?);
    Ok(())
}

fn run_print_config(cli: &Cli, settings: &Settings) -> Result<()> {
    let path = cli.config_file.clone()
        .or_else(Config::config_path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let o = &settings.options;
    let t = &settings.palette.thresholds;
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  mount  = {}", settings.mount.display());
    println!("  mode   = {}", settings.mode.label());
    println!("  metric = {}", settings.metric.label());
    println!();
    println!("[display]");
    println!("  colors          = {}", o.use_colors);
    println!("  powerline_left  = {}", o.use_powerline_left);
    println!("  powerline_right = {}", o.use_powerline_right);
    println!("  segments_left   = {}", o.segments_to_left);
    println!("  left_color      = {}", o.left_color);
    println!("  theme           = {}", settings.theme.name());
    println!();
    println!("[thresholds]");
    println!("  mid_pct  = {}%", t.mid_pct);
    println!("  high_pct = {}%", t.high_pct);
    println!("  crit_pct = {}%", t.crit_pct);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tmux-disk").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_defaults_follow_config() {
        let cli = parse(&[]);
        let mut cfg = Config::default();
        cfg.general.mode = MemoryMode::UsagePercentage;
        cfg.display.colors = true;
        cfg.display.left_color = 236;

        let s = Settings::resolve(&cli, &cfg);
        assert_eq!(s.mode, MemoryMode::UsagePercentage);
        assert_eq!(s.mount, PathBuf::from("/"));
        assert!(s.options.use_colors);
        assert_eq!(s.options.left_color, 236);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = parse(&[
            "--mode", "free", "-p", "/home", "--metric", "used",
            "-c", "--powerline-right", "--segments-left", "--left-color", "240", "-t", "gruvbox",
        ]);
        let s = Settings::resolve(&cli, &Config::default());
        assert_eq!(s.mode, MemoryMode::FreeMemory);
        assert_eq!(s.mount, PathBuf::from("/home"));
        assert_eq!(s.metric, Metric::Used);
        assert!(s.options.use_colors);
        assert!(s.options.use_powerline_right);
        assert!(s.options.segments_to_left);
        assert!(!s.options.use_powerline_left);
        assert_eq!(s.options.left_color, 240);
        assert_eq!(s.theme, ThemeVariant::Gruvbox);
        assert_eq!(s.palette.low, "#b8bb26");
    }

    #[test]
    fn test_json_snapshot_fields() {
        let s = Settings::resolve(&parse(&["--mode", "percent"]), &Config::default());
        let text = json_snapshot(&s).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["mount"], "/");
        assert_eq!(v["mode"], "percent");
        assert_eq!(v["metric"], "available");
        assert!(v["total_mb"].as_f64().unwrap() > 0.0);
        assert!(v["used_mb"].is_number());
        assert!(v["segment"].as_str().unwrap().ends_with('%'));
    }

    #[test]
    fn test_json_snapshot_non_utf8_mount() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let mount = dir.path().join(OsStr::from_bytes(b"disk\xff"));
        std::fs::create_dir(&mount).unwrap();

        let mut s = Settings::resolve(&parse(&[]), &Config::default());
        s.mount = mount;
        let text = json_snapshot(&s).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(v["mount"].as_str().unwrap().ends_with("disk\u{FFFD}"));
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tmux-disk", "--mode", "bogus"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

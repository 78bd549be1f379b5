//! mdpane - A terminal markdown editor with live preview.
//!
//! # Usage
//!
//! ```bash
//! mdpane notes.md
//! mdpane --watch notes.md
//! mdpane --no-preview notes.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdpane::app::App;
use mdpane::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use mdpane::highlight::{HighlightBackground, set_background_mode};
use mdpane::perf;

/// A terminal markdown editor with live side-by-side preview
#[derive(Parser, Debug)]
#[command(name = "mdpane", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (a new buffer when missing or omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Watch the file and reload external changes
    #[arg(short, long)]
    watch: bool,

    /// Start with the preview pane hidden
    #[arg(long)]
    no_preview: bool,

    /// Force the syntax highlight theme background (light or dark)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Write frame/watcher debug events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults in the config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("MDPANE_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    match effective.theme.unwrap_or(ThemeMode::Auto) {
        // Auto defers to COLORFGBG when the terminal sets it.
        ThemeMode::Auto => set_background_mode(None),
        ThemeMode::Light => set_background_mode(Some(HighlightBackground::Light)),
        ThemeMode::Dark => set_background_mode(Some(HighlightBackground::Dark)),
    }

    // Run the application
    let mut app = App::new(cli.file)
        .with_watch(effective.watch)
        .with_preview_visible(!effective.no_preview)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}

//! Linepad - A plain-text editor with a line-number gutter.
//!
//! # Usage
//!
//! ```bash
//! linepad
//! linepad notes.txt
//! linepad --no-highlight --theme light notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linepad::app::App;
use linepad::config::{
    ConfigFlags, ThemeMode, arg_tokens, clear_config_flags, global_config_path,
    load_config_flags, local_override_path, parse_flag_tokens, save_config_flags,
};
use linepad::import::DEFAULT_EXTENSION;
use linepad::perf;

/// A plain-text editor with a line-number gutter
#[derive(Parser, Debug)]
#[command(name = "linepad", version, about, long_about = None)]
struct Cli {
    /// Text file to load at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Extension accepted by the load prompt
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Disable current-line highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Color theme for the editor chrome
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed render and load events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = arg_tokens(std::env::args_os());
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
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("LINEPAD_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize render debug log {}: {}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    // Verify file exists
    if let Some(file) = &cli.file
        && !file.exists()
    {
        anyhow::bail!("File not found: {}", file.display());
    }

    let extension = effective
        .extension
        .clone()
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    // Run the application
    let mut app = App::new(cli.file)
        .with_extension(extension)
        .with_highlight(!effective.no_highlight)
        .with_theme(effective.theme.unwrap_or_default())
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

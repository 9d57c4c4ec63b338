//! Saved default flags.
//!
//! Defaults live in plain flag files: a global one under the user's config
//! directory and an optional `.linepadrc` in the working directory. Both hold
//! the same tokens as the command line, one or more per line, with `#`
//! comments.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_highlight: bool,
    pub perf: bool,
    pub extension: Option<String>,
    pub theme: Option<ThemeMode>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; booleans accumulate, `other` wins for options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_highlight: self.no_highlight || other.no_highlight,
            perf: self.perf || other.perf,
            extension: other.extension.clone().or_else(|| self.extension.clone()),
            theme: other.theme.or(self.theme),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("linepad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("linepad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("linepad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("linepad")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".linepadrc")
}

/// Read a flag file; a missing file yields empty flags.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write `flags` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# linepad defaults (saved with --save)".to_string()];
    if flags.no_highlight {
        lines.push("--no-highlight".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(ext) = &flags.extension {
        lines.push(format!("--extension {ext}"));
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme.as_str()));
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove a flag file if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Raw process arguments as tokens for [`parse_flag_tokens`].
///
/// Arguments that are not valid UTF-8 (a file name, usually) are converted
/// lossily instead of aborting; clap still sees the original `OsString`s.
pub fn arg_tokens<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Pick known flags out of raw tokens; anything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
            _ => (token.as_str(), None),
        };
        match name {
            "--no-highlight" => flags.no_highlight = true,
            "--perf" => flags.perf = true,
            "--extension" | "--theme" | "--render-debug-log" => {
                let Some(value) = inline.or_else(|| iter.next().cloned()) else {
                    continue;
                };
                match name {
                    "--extension" => flags.extension = normalize_extension(&value),
                    "--theme" => flags.theme = parse_theme(&value),
                    _ => flags.render_debug_log = Some(PathBuf::from(value)),
                }
            }
            _ => {}
        }
    }
    flags
}

/// Strip a leading dot so `.txt` and `txt` mean the same thing.
pub fn normalize_extension(value: &str) -> Option<String> {
    let ext = value.trim().trim_start_matches('.');
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "dark" => Some(ThemeMode::Dark),
        "light" => Some(ThemeMode::Light),
        _ => None,
    }
}

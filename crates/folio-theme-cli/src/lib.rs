//! Command-line driver for the folio-theme store.
//!
//! Runs one store session against a file-backed preference record, so the
//! recorded theme can be inspected or changed outside the browser, e.g. by
//! a static-site build that bakes the initial `<html>` class.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use folio_theme::{
    FileStorage, NoStorage, PreferenceStorage, RootFlags, SwitcherIcon, Theme, ThemeConfig,
    ThemeProvider,
};
use serde::Serialize;

/// Inspect or change the recorded light/dark preference.
#[derive(Debug, Parser)]
#[command(name = "folio-theme", version, about)]
pub struct Cli {
    /// Preference file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Store configuration file (YAML, or JSON by extension)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the active theme
    Show,
    /// Switch to the other theme
    Toggle,
    /// Switch to the given theme if it is not already active
    Set {
        /// `light` or `dark`
        theme: Theme,
    },
}

/// Outcome of one CLI session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub theme: Theme,
    pub icon: &'static str,
    pub flags: Vec<String>,
    pub store: Option<PathBuf>,
    pub changed: bool,
}

/// Where the preference file lives when `--store` is not given.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio-theme").join("preferences.json"))
}

/// Runs the command against a fresh store session.
pub fn run(cli: &Cli) -> Result<Status> {
    let config = match &cli.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ThemeConfig::default(),
    };

    let store = cli.store.clone().or_else(default_store_path);
    let storage: Box<dyn PreferenceStorage> = match &store {
        Some(path) => Box::new(FileStorage::new(path)),
        None => {
            tracing::warn!("no config directory found, preference will not persist");
            Box::new(NoStorage)
        }
    };

    let root = RootFlags::new();
    let provider = ThemeProvider::with_config(config, storage, root.clone());
    let handle = provider.handle();
    let _log = handle.subscribe(|theme| tracing::debug!(%theme, "root flag updated"))?;

    let start = handle.current()?;
    match cli.command {
        Command::Show => {}
        Command::Toggle => handle.toggle()?,
        Command::Set { theme } => {
            if handle.current()? != theme {
                handle.toggle()?;
            }
        }
    }

    let theme = handle.current()?;
    Ok(Status {
        theme,
        icon: SwitcherIcon::for_theme(theme).name(),
        flags: root.flags(),
        store,
        changed: theme != start,
    })
}

/// Formats a status for the terminal, or as JSON.
pub fn render(status: &Status, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(status).context("failed to serialize status");
    }

    let theme_style = match status.theme {
        Theme::Light => Style::new().yellow().bold(),
        Theme::Dark => Style::new().blue().bold(),
    };
    let muted = Style::new().dim();

    let mut out = format!("theme: {}", theme_style.apply_to(status.theme));
    if status.changed {
        out.push_str(&format!(" {}", muted.apply_to("(changed)")));
    }
    out.push_str(&format!("\nroot:  {}", status.flags.join(" ")));
    match &status.store {
        Some(path) => out.push_str(&format!("\nstore: {}", path.display())),
        None => out.push_str(&format!("\nstore: {}", muted.apply_to("none"))),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(theme: Theme, changed: bool) -> Status {
        Status {
            theme,
            icon: SwitcherIcon::for_theme(theme).name(),
            flags: vec![theme.as_str().to_string()],
            store: Some(PathBuf::from("/tmp/prefs.json")),
            changed,
        }
    }

    #[test]
    fn test_render_text() {
        console::set_colors_enabled(false);
        let out = render(&status(Theme::Light, true), false).unwrap();
        let expected = "theme: light (changed)\nroot:  light\nstore: /tmp/prefs.json";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_json() {
        let out = render(&status(Theme::Dark, false), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["icon"], "sun");
        assert_eq!(value["changed"], false);
    }

    #[test]
    fn test_cli_parses_set() {
        let args = ["folio-theme", "set", "light", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Set { theme } => assert_eq!(theme, Theme::Light),
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["folio-theme", "set", "blue"]).is_err());
    }
}

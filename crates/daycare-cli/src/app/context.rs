//! Application context for the Daycare CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file and dataset.

use chrono::{Local, NaiveDate};
use once_cell::unsync::OnceCell;

use daycare_core::Dataset;

use crate::cli::{Cli, OutputArgs};
use crate::config::{read_config, DaycareConfig};
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::ui::context::{Terminal, UiPrefs};
use crate::ui::UiContext;

use super::resolver::{missing_config_message, resolve_config_path, resolve_data_path, ConfigSource};

/// Application context that bundles CLI args with configuration and data.
///
/// Commands receive this instead of threading paths and flags around.
pub struct AppContext<'a> {
    cli: &'a Cli,
    today: NaiveDate,
    terminal: Terminal,
    config: OnceCell<DaycareConfig>,
    dataset: OnceCell<Dataset>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self::with_today(cli, Local::now().date_naive())
    }

    /// Create a context pinned to a specific "today".
    pub fn with_today(cli: &'a Cli, today: NaiveDate) -> Self {
        Self {
            cli,
            today,
            terminal: Terminal::detect(),
            config: OnceCell::new(),
            dataset: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Reference date for "current month" defaults and seeded events.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DaycareConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Get the dataset, loading it lazily if needed.
    pub fn dataset(&self) -> anyhow::Result<&Dataset> {
        self.dataset.get_or_try_init(|| {
            let config = self.config()?;
            match resolve_data_path(self.cli, config)? {
                Some(path) => Ok(Dataset::load(&path)?),
                None => {
                    tracing::debug!(today = %self.today, "using seed dataset");
                    Ok(Dataset::seeded(self.today))
                }
            }
        })
    }

    /// UI context for a command's output flags.
    pub fn ui_context(&self, output: &OutputArgs) -> anyhow::Result<UiContext> {
        let format = parse_output_format(output.format.as_deref())?;
        if output.json && format.is_some() {
            return Err(CliError::invalid_input("--format cannot be used with --json").into());
        }
        Ok(UiContext::resolve(
            &self.terminal,
            self.ui_prefs(),
            output.json,
            format,
        ))
    }

    /// UI context for reporting errors, which must not fail itself.
    pub fn error_ui_context(&self) -> UiContext {
        UiContext::for_errors(&self.terminal, self.ui_prefs())
    }

    /// Flags win over the `[ui]` config section; an unreadable config
    /// leaves the defaults.
    fn ui_prefs(&self) -> UiPrefs {
        let config = self
            .config()
            .map(|c| UiPrefs {
                color: c.ui.color,
                ascii: c.ui.ascii,
            })
            .unwrap_or_default();
        UiPrefs {
            color: config.color && !self.cli.no_color,
            ascii: config.ascii || self.cli.ascii,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<DaycareConfig> {
    match resolve_config_path(cli)? {
        ConfigSource::Explicit(path) if !path.exists() => Err(CliError::not_found(
            missing_config_message(&path),
            "Check --config or DAYCARE_CONFIG.",
        )
        .into()),
        ConfigSource::Default(path) if !path.exists() => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            Ok(DaycareConfig::default())
        }
        source => {
            tracing::debug!(path = %source.path().display(), "reading config");
            read_config(source.path())
        }
    }
}

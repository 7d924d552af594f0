//! # Configuration
//!
//! Rollcall configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ROLLCALL_DATA`, `ROLLCALL_LOCALE`, etc.
//! 2. **Config file**: `rollcall.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_dir` | `ROLLCALL_DATA` | platform data dir | Where the ledger slots live |
//! | `report_title` | `ROLLCALL_REPORT_TITLE` | `Tidsregistreringer` | Report subject prefix |
//! | `locale` | `ROLLCALL_LOCALE` | `da_DK` | Locale for the subject date |
//! | `recipient` | `ROLLCALL_RECIPIENT` | none | Address the report is sent to |

use crate::error::{Result, RollcallError};
use crate::report::{parse_locale, ReportOptions};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "rollcall.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Directory holding the ledger slots.
    #[config(env = "ROLLCALL_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Subject prefix for the emailed report.
    #[config(env = "ROLLCALL_REPORT_TITLE", default = "Tidsregistreringer")]
    pub report_title: String,

    /// Locale name (e.g. "da_DK", "en_US") for the date in the subject.
    #[config(env = "ROLLCALL_LOCALE", default = "da_DK")]
    pub locale: String,

    /// Mail address the report is addressed to.
    #[config(env = "ROLLCALL_RECIPIENT")]
    pub recipient: Option<String>,
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            report_title: "Tidsregistreringer".to_string(),
            locale: "da_DK".to_string(),
            recipient: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "rollcall", "rollcall")
}

/// Platform config directory, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

impl RollcallConfig {
    /// Loads env vars, then `rollcall.toml` in `config_dir` (if present), then defaults.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        Ok(builder.load()?)
    }

    /// The configured data dir, else the platform data dir.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| RollcallError::Store("Could not determine data dir".to_string()))
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::local(self.report_title.clone(), parse_locale(&self.locale))
    }
}

use crate::error::{ConfigError, QuizError};
use crate::logger;
use crate::models::{MAX_FACTOR, QuizConfig, TimerConfig};
use crate::utils::parse_positive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROBLEMS: u32 = 10;
pub const DEFAULT_TIMER_SECONDS: u32 = 6;
pub const MIN_TIMER_SECONDS: u32 = 3;
pub const DEFAULT_LOG_FILE: &str = "drill_debug.log";

pub const CONFIG_PATH_ENV: &str = "TIMES_TABLES_CONFIG";
pub const LOG_PATH_ENV: &str = "TIMES_TABLES_LOG";

/// Raw values as typed on the configuration screen.
///
/// Numeric fields stay text until `validate` so the screen can show exactly
/// what the user typed; validation writes corrected defaults back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    pub tables: BTreeSet<u32>,
    pub problems: String,
    pub timer_enabled: bool,
    pub timer_seconds: String,
    pub auto_skip: bool,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            tables: BTreeSet::new(),
            problems: DEFAULT_PROBLEMS.to_string(),
            timer_enabled: false,
            timer_seconds: DEFAULT_TIMER_SECONDS.to_string(),
            auto_skip: false,
        }
    }
}

impl ConfigForm {
    pub fn toggle_table(&mut self, table: u32) {
        if !self.tables.remove(&table) {
            self.tables.insert(table);
        }
    }

    pub fn is_selected(&self, table: u32) -> bool {
        self.tables.contains(&table)
    }

    /// Builds a `QuizConfig`. Bad counts are replaced by defaults in place;
    /// only the table selection can fail.
    pub fn validate(&mut self) -> Result<QuizConfig, QuizError> {
        if self.tables.is_empty() {
            return Err(QuizError::EmptyTableSelection);
        }

        let problems = match parse_positive(&self.problems) {
            Some(n) => n,
            None => {
                self.problems = DEFAULT_PROBLEMS.to_string();
                DEFAULT_PROBLEMS
            }
        };

        let timer = if self.timer_enabled {
            let seconds = match parse_positive(&self.timer_seconds) {
                Some(n) if n >= MIN_TIMER_SECONDS => n,
                _ => {
                    self.timer_seconds = DEFAULT_TIMER_SECONDS.to_string();
                    DEFAULT_TIMER_SECONDS
                }
            };
            Some(TimerConfig {
                seconds,
                auto_skip: self.auto_skip,
            })
        } else {
            None
        };

        QuizConfig::new(self.tables.iter().copied().collect(), problems, timer)
    }
}

/// Startup defaults for the configuration screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tables: Vec<u32>,
    pub problems: u32,
    pub timer_enabled: bool,
    pub timer_seconds: u32,
    pub auto_skip: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tables: Vec::new(),
            problems: DEFAULT_PROBLEMS,
            timer_enabled: false,
            timer_seconds: DEFAULT_TIMER_SECONDS,
            auto_skip: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads the file named by `TIMES_TABLES_CONFIG`, falling back to
    /// defaults, then applies `TIMES_TABLES_LOG`.
    pub fn load() -> Self {
        Self::load_from(
            std::env::var_os(CONFIG_PATH_ENV),
            std::env::var_os(LOG_PATH_ENV),
        )
    }

    fn load_from(config_path: Option<OsString>, log_path: Option<OsString>) -> Self {
        let mut settings = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::from_path(&path).unwrap_or_else(|e| {
                    logger::log(&format!(
                        "Ignoring settings file {}: {}",
                        path.display(),
                        e
                    ));
                    Self::default()
                })
            }
            None => Self::default(),
        };

        if let Some(log_path) = log_path {
            settings.log_file = Some(PathBuf::from(log_path));
        }
        settings
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Seeds the form. Tables the screen cannot show (0 or above 12) are
    /// dropped here; out of range counts are left for `validate` to correct.
    pub fn to_form(&self) -> ConfigForm {
        ConfigForm {
            tables: self
                .tables
                .iter()
                .copied()
                .filter(|t| (1..=MAX_FACTOR).contains(t))
                .collect(),
            problems: self.problems.to_string(),
            timer_enabled: self.timer_enabled,
            timer_seconds: self.timer_seconds.to_string(),
            auto_skip: self.auto_skip,
        }
    }
}

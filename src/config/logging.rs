//! `[logging]` section: filter level and the optional rolling log files

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_DIR: &str = "./logs";
const DEFAULT_PREFIX: &str = "mission-board";

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Config spelling of each rotation
const ROTATION_NAMES: [(LogRotation, &str); 3] = [
    (LogRotation::Hourly, "hourly"),
    (LogRotation::Daily, "daily"),
    (LogRotation::Never, "never"),
];

impl LogRotation {
    /// Case-insensitive; anything unrecognized rotates daily
    pub fn parse(s: &str) -> Self {
        ROTATION_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(rotation, _)| *rotation)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        ROTATION_NAMES
            .iter()
            .find(|(rotation, _)| rotation == self)
            .map_or("daily", |(_, name)| *name)
    }

    fn rotation(self) -> Rotation {
        match self {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter level for the `mission_board` target (overridden by RUST_LOG)
    pub level: String,
    /// Mirror events into files; the in-app logs panel is always fed
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File names come out as `<prefix>.<date>`
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_enabled: false,
            file_dir: PathBuf::from(DEFAULT_DIR),
            file_rotation: LogRotation::default(),
            file_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// `[logging]` as written in config.toml
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let FileLogging {
            level,
            file_enabled,
            file_dir,
            file_rotation,
            file_prefix,
        } = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: level.unwrap_or(defaults.level),
            file_enabled: file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_dir.map_or(defaults.file_dir, PathBuf::from),
            file_rotation: file_rotation.map_or(defaults.file_rotation, |s| LogRotation::parse(&s)),
            file_prefix: file_prefix.unwrap_or(defaults.file_prefix),
        }
    }

    /// Rolling appender for `file_dir`, creating the directory first
    pub fn file_appender(&self) -> std::io::Result<RollingFileAppender> {
        std::fs::create_dir_all(&self.file_dir)?;
        Ok(RollingFileAppender::new(
            self.file_rotation.rotation(),
            &self.file_dir,
            &self.file_prefix,
        ))
    }
}

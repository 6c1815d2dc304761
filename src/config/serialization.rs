//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let timeout = match self.request_timeout_secs {
            Some(secs) => format!("request_timeout_secs = {}", secs),
            None => "# request_timeout_secs = 30".to_string(),
        };

        format!(
            r#"# mission-board configuration

# Satellite API base URL (GET <url>/satellites)
# Env override: MISSION_BOARD_API_URL
api_base_url = "{api}"

# Give up on a fetch after this many seconds (unset = wait forever)
{timeout}

# Theme: Mission Control, Deep Space, Terminal
theme = "{theme}"

# Milliseconds between screen redraws
tick_rate_ms = {tick}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api = self.api_base_url,
            timeout = timeout,
            theme = self.theme,
            tick = self.tick_rate_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Write the config to `path`, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml())
    }
}

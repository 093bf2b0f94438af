use serde::Deserialize;
use web_sys::window;

/// localStorage key holding an optional TOML override of the defaults.
pub const CONFIG_OVERRIDE_KEY: &str = "arcus_config";

/// Every section and field has a default, so an override may name only the
/// values it changes.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub forms: FormsConfig,
    pub reports: ReportsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated latency of a login attempt.
    pub login_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    /// Simulated latency of saving any form.
    pub save_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportsConfig {
    pub export_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

const DEFAULT_DELAY_MS: u32 = 1000;

impl Default for AuthConfig {
    fn default() -> Self {
        Self { login_delay_ms: DEFAULT_DELAY_MS }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self { save_delay_ms: DEFAULT_DELAY_MS }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self { export_delay_ms: DEFAULT_DELAY_MS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "debug".to_string() }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[auth]
login_delay_ms = 1000

[forms]
save_delay_ms = 1000

[reports]
export_delay_ms = 1000

[logging]
level = "debug"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

fn read_override() -> Option<String> {
    window()?.local_storage().ok()??.get_item(CONFIG_OVERRIDE_KEY).ok()?
}

/// Load configuration
///
/// Search order:
/// 1. TOML stored under `arcus_config` in localStorage
/// 2. Falls back to embedded default config
///
/// Runs before the logger exists, so problems are reported through the
/// returned notes instead of `log`.
pub fn load_config() -> (AppConfig, Vec<String>) {
    let mut notes = Vec::new();

    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                notes.push(format!("Loading config from localStorage key '{}'", CONFIG_OVERRIDE_KEY));
                return (config, notes);
            }
            Err(e) => notes.push(format!("Ignoring invalid config override: {}", e)),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            notes.push("Using default embedded configuration".to_string());
            (config, notes)
        }
        Err(e) => {
            notes.push(format!("Embedded configuration is invalid: {}", e));
            (AppConfig::default(), notes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_override_changes_delays() {
        let config = parse_config(
            r#"
            [auth]
            login_delay_ms = 0
            [forms]
            save_delay_ms = 250
            [reports]
            export_delay_ms = 10
            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.login_delay_ms, 0);
        assert_eq!(config.forms.save_delay_ms, 250);
        assert_eq!(config.logging.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = parse_config("[auth]\nlogin_delay_ms = 5\n").unwrap();
        assert_eq!(config.auth.login_delay_ms, 5);
        assert_eq!(config.forms, FormsConfig::default());
        assert_eq!(config.reports, ReportsConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());

        let only_level = parse_config("[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(only_level.logging.log_level(), log::Level::Info);
        assert_eq!(only_level.auth.login_delay_ms, 1000);

        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_override_is_rejected() {
        assert!(parse_config("not toml at all [").is_err());
        assert!(parse_config("[auth]\nlogin_delay_ms = \"slow\"\n").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let logging = LoggingConfig { level: "verbose".into() };
        assert_eq!(logging.log_level(), log::Level::Debug);
    }
}

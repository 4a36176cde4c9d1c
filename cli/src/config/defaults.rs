/// Default base configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Fallback log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .unwrap();

        let level: String = config.get("logging.level").unwrap();
        assert!(LOG_LEVELS.contains(&level.as_str()));
        assert!(config.get::<String>("themes_dir").is_err());
    }
}

use std::{env, path::PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{
    cli::{AppCli, Command},
    errors::{AppError, AppResult},
    util::parse_log_level,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Logger {
    pub(crate) level: String,
    pub(crate) dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Report {
    pub(crate) format: ReportFormat,
    pub(crate) bitpool_override: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) logger: Logger,
    pub(crate) report: Report,
}

impl AppConfig {
    pub(crate) fn new(config_path: Option<PathBuf>) -> AppResult<Self> {
        let config_path_composed =
            config_path.or_else(|| env::var("SBC_BITRATE_CONFIG").ok().map(PathBuf::from));
        Self::load(config_path_composed, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("SBC_BITRATE")
            .prefix_separator("_")
            .separator("__")
    }

    fn load(config_path: Option<PathBuf>, environment: Environment) -> AppResult<Self> {
        let mut builder = Config::builder()
            .set_default("logger.level", "info")?
            .set_default("report.format", "text")?;
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        let result = builder.add_source(environment).build()?;
        let config = result.try_deserialize()?;
        Ok(config)
    }

    pub(crate) fn apply(&mut self, cli_args: &AppCli) {
        if let Some(level) = cli_args.log_level.as_ref() {
            self.logger.level = level.clone();
        }

        if let Some(format) = cli_args.command.format() {
            self.report.format = format;
        }

        if let Command::Decode(args) = &cli_args.command {
            if args.bitpool.is_some() {
                self.report.bitpool_override = args.bitpool;
            }
        }
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        let _ = parse_log_level(&self.logger.level)?;

        if self
            .logger
            .dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(AppError::ConfigError(ConfigError::Message(
                "the log dir config is empty".to_owned(),
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<config::Map<String, String>>();
        AppConfig::environment().source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(None, environment(&[])).unwrap();
        assert_eq!(config.logger.level, "info");
        assert!(config.logger.dir.is_none());
        assert_eq!(config.report.format, ReportFormat::Text);
        assert!(config.report.bitpool_override.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_config_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conf/sbc_bitrate.toml");
        let config = AppConfig::load(Some(path), environment(&[])).unwrap();
        assert_eq!(config.logger.level, "info");
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn test_environment_override() {
        let config = AppConfig::load(
            None,
            environment(&[
                ("SBC_BITRATE_LOGGER__LEVEL", "debug"),
                ("SBC_BITRATE_LOGGER__DIR", "/tmp/sbc_bitrate"),
                ("SBC_BITRATE_REPORT__FORMAT", "json"),
                ("SBC_BITRATE_REPORT__BITPOOL_OVERRIDE", "35"),
            ]),
        )
        .unwrap();
        assert_eq!(config.logger.level, "debug");
        assert_eq!(config.logger.dir, Some(PathBuf::from("/tmp/sbc_bitrate")));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.bitpool_override, Some(35));
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = AppConfig::load(
            None,
            environment(&[("SBC_BITRATE_REPORT__BITPOOL_OVERRIDE", "35")]),
        )
        .unwrap();
        let cli = AppCli::try_parse_from([
            "sbc_bitrate",
            "--log-level",
            "warn",
            "decode",
            "--bitpool",
            "40",
            "--format",
            "json",
            "21150235",
        ])
        .unwrap();
        config.apply(&cli);
        assert_eq!(config.logger.level, "warn");
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.bitpool_override, Some(40));

        // no --bitpool keeps the configured override
        let mut config = AppConfig::load(
            None,
            environment(&[("SBC_BITRATE_REPORT__BITPOOL_OVERRIDE", "35")]),
        )
        .unwrap();
        let cli = AppCli::try_parse_from(["sbc_bitrate", "decode", "21150235"]).unwrap();
        config.apply(&cli);
        assert_eq!(config.logger.level, "info");
        assert_eq!(config.report.format, ReportFormat::Text);
        assert_eq!(config.report.bitpool_override, Some(35));
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::load(None, environment(&[])).unwrap();
        config.logger.level = "verbose".to_owned();
        assert!(config.validate().is_err());

        config.logger.level = "TRACE".to_owned();
        config.logger.dir = Some(PathBuf::new());
        assert!(config.validate().is_err());

        config.logger.dir = Some(PathBuf::from("logs"));
        assert!(config.validate().is_ok());
    }
}

use log::LevelFilter;
use simplelog::*;
use std::fs::File;
use std::path::PathBuf;

/// Logging configuration. Output always goes to a file: stdout belongs to the terminal UI.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Master switch to enable/disable all logging
    pub enabled: bool,
    /// Path to the log file
    pub log_file: PathBuf,
    /// Whether to clear the log file on startup
    pub clear_on_startup: bool,
    /// Feature flags for specific logging categories
    pub features: LogFeatures,
    /// Overall log level
    pub level: LevelFilter,
}

/// Feature flags for specific logging categories
#[derive(Debug, Clone)]
pub struct LogFeatures {
    /// Log key events
    pub key_events: bool,
    /// Log API calls and their outcomes
    pub api_calls: bool,
    /// Log compose form transitions
    pub compose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: PathBuf::from("tweetbox_debug.log"),
            clear_on_startup: true,
            features: LogFeatures::default(),
            level: LevelFilter::Info,
        }
    }
}

impl Default for LogFeatures {
    fn default() -> Self {
        Self {
            key_events: false,
            api_calls: true,
            compose: true,
        }
    }
}

impl LogConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Only errors and warnings
    pub fn minimal() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Warn,
            features: LogFeatures {
                key_events: false,
                api_calls: false,
                compose: false,
            },
            ..Default::default()
        }
    }

    pub fn verbose() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Trace,
            features: LogFeatures {
                key_events: true,
                api_calls: true,
                compose: true,
            },
            ..Default::default()
        }
    }
}

/// Initialize the logging system with the given configuration
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    if !config.enabled {
        let _ = WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink());
        return Ok(());
    }

    if config.clear_on_startup {
        let _ = File::create(&config.log_file)?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder)
        .build();

    WriteLogger::init(config.level, log_config, log_file)?;

    log::info!("Logging initialized: file={}, level={:?}", config.log_file.display(), config.level);
    log::debug!("Log features: {:?}", config.features);

    Ok(())
}

/// Macro for logging key events
#[macro_export]
macro_rules! log_key_event {
    ($config:expr, $($arg:tt)*) => {
        if $config.enabled && $config.features.key_events {
            log::debug!(target: "key_events", $($arg)*);
        }
    };
}

/// Macro for logging API calls
#[macro_export]
macro_rules! log_api_call {
    ($config:expr, $($arg:tt)*) => {
        if $config.enabled && $config.features.api_calls {
            log::info!(target: "api_calls", $($arg)*);
        }
    };
}

/// Macro for logging compose form transitions
#[macro_export]
macro_rules! log_compose {
    ($config:expr, $($arg:tt)*) => {
        if $config.enabled && $config.features.compose {
            log::debug!(target: "compose", $($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(!LogConfig::disabled().enabled);
        assert_eq!(LogConfig::minimal().level, LevelFilter::Warn);
        assert!(!LogConfig::minimal().features.api_calls);
        assert!(LogConfig::verbose().features.key_events);
        assert_eq!(LogConfig::default().log_file, PathBuf::from("tweetbox_debug.log"));
    }
}

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Resolution order: `env_filter`, then `RUST_LOG`, then `default_level`.
/// `modules` are applied on top of whichever of those won, so a host can
/// keep per-attribute binding traces quiet while debugging the pools:
///
/// ```rust,ignore
/// init_logging(
///     LoggingConfig::default()
///         .with_module("flexbox_ui::attr", LevelFilter::Warn)
///         .with_module("flexbox_engine::pool", LevelFilter::Trace),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"info,flexbox_engine=debug"`.
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub modules: Vec<(String, LevelFilter)>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>, level: LevelFilter) -> Self {
        self.modules.push((module.into(), level));
        self
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(self.default_level),
        };
        for (module, level) in &self.modules {
            builder.filter_module(module, *level);
        }
        builder.write_style(self.write_style);
        builder
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            modules: Vec::new(),
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger once. Later calls are ignored, whatever their
/// configuration.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // Another logger may already be installed (tests, embedding hosts).
        if config.builder().try_init().is_err() {
            log::debug!("logger already installed; keeping it");
            return;
        }
        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_levels_override_the_filter() {
        let logger = LoggingConfig::default()
            .with_filter("warn")
            .with_module("flexbox_engine::pool", LevelFilter::Trace)
            .builder()
            .build();
        let pool = log::Metadata::builder().level(log::Level::Trace).target("flexbox_engine::pool").build();
        let other = log::Metadata::builder().level(log::Level::Info).target("flexbox_ui::attr").build();
        assert!(log::Log::enabled(&logger, &pool));
        assert!(!log::Log::enabled(&logger, &other));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default().with_filter("trace"));
    }
}

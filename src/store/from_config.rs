//! Store wiring from pagelog config files: the default-wiring factory for
//! embedders that don't assemble collaborators by hand.

use super::{LogStore, LogStoreBuilder};
use crate::config::Config;
use crate::console::Color;
use crate::host::StaticHost;
use crate::level::Level;
use crate::storage::{FileStorage, MemoryStorage};

impl LogStore {
    /// Builds a store from the default pagelog config file, falling back to
    /// defaults when no file exists.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_default();
        Self::from_config(&config)
    }

    /// Builds a store from a given config.
    ///
    /// The `[host]` section's presence is the environment-detection signal:
    /// without it the store is wired to an absent host and starts disabled.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::builder()
            .level(config.parse_level())
            .enabled(config.general.enabled)
            .storage_key(config.store.key.clone())
            .max_entries(config.store.max_entries)
            .expire_days(config.store.expire_days)
            .console(config.console.enabled)
            .colors(config.console.colors);

        builder = Self::configure_storage(builder, config);

        // Level color overrides from config (e.g. level_colors.error = "#ff5555")
        for (level_name, hex) in &config.console.level_colors {
            if let Ok(level) = level_name.parse::<Level>() {
                builder = builder.level_color(level, Color::from_hex(hex));
            }
        }

        if let Some(host_config) = &config.host {
            let mut host = StaticHost::new();
            if let Some(url) = &host_config.url {
                host = host.url(url.clone());
            }
            if let Some(user_agent) = &host_config.user_agent {
                host = host.user_agent(user_agent.clone());
            }
            if let Some(download_dir) = &host_config.download_dir {
                let expanded = shellexpand::tilde(download_dir);
                host = host.download_dir(expanded.as_ref());
            }
            builder = builder.host(host);
        }

        builder.build()
    }

    /// Backend selection: `"memory"` for process-lifetime capture, anything
    /// else gets the durable file store.
    fn configure_storage(builder: LogStoreBuilder, config: &Config) -> LogStoreBuilder {
        if config.storage.backend.eq_ignore_ascii_case("memory") {
            return builder.storage(MemoryStorage::new());
        }

        let mut storage = FileStorage::new();
        if let Some(base_dir) = &config.storage.base_dir {
            storage = storage.base_dir(base_dir.clone());
        }
        builder.storage(storage)
    }
}

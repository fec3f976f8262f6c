use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use config::ConfigError;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration from `config.toml` (if present) and
/// `LEADS__*` environment variables.
pub fn init_config() -> Result<(), ConfigError> {
    init_config_with_path(DEFAULT_CONFIG_PATH)
}

/// Initialize the global configuration from an explicit TOML path.
///
/// Has no effect if the configuration was already initialized. A file that
/// exists but cannot be parsed is an error.
pub fn init_config_with_path(path: &str) -> Result<(), ConfigError> {
    if CONFIG.get().is_some() {
        return Ok(());
    }
    let config = StaticConfig::load_from(path)?;
    let _ = CONFIG.set(ArcSwap::from_pointee(config));
    Ok(())
}

/// Replace the whole configuration.
///
/// Readers holding an older `Arc` keep seeing the previous snapshot.
pub fn update_config(config: StaticConfig) {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .store(Arc::new(config));
}

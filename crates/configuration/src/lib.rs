use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{SslWeights, StatsConfig};

/// Name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "leaguestat";

/// Loads the statistics configuration.
///
/// With an explicit `path` the file must exist. Without one, `leaguestat.toml` in the
/// working directory is used if present. `LEAGUESTAT__SSL__SCORING_SHARE=3` style
/// environment variables override either source. Missing values fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<StatsConfig, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("LEAGUESTAT").separator("__"))
        .build()?;

    let config = builder.try_deserialize::<StatsConfig>()?;
    validate(&config)?;

    tracing::debug!(?config, "Loaded statistics configuration");
    Ok(config)
}

/// Rejects weights that would flip the meaning of the blend.
pub fn validate(config: &StatsConfig) -> Result<(), ConfigError> {
    let weights = &config.ssl;
    for (name, value) in [
        ("ssl.awal_per_game", weights.awal_per_game),
        ("ssl.scoring_share", weights.scoring_share),
        ("ssl.max_min_score", weights.max_min_score),
    ] {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ConfigError::ValidationError(format!(
                "{name} must not be negative, got {value}"
            )));
        }
    }
    if weights != &SslWeights::default() {
        tracing::warn!("SSL weights differ from the defaults; Team Score values are not comparable across tools");
    }
    Ok(())
}

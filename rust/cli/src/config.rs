//! Layered configuration: defaults, then a TOML file named by
//! `POKERSIM_CONFIG`, then `POKERSIM_*` environment variables.
//! Command-line flags override the result at the call site.

use pokersim_engine::simulation::Target;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POKERSIM_CONFIG";
pub const SEED_ENV: &str = "POKERSIM_SEED";
pub const TARGET_ENV: &str = "POKERSIM_TARGET";
pub const TRIALS_ENV: &str = "POKERSIM_TRIALS";
pub const MAX_TRIALS_ENV: &str = "POKERSIM_MAX_TRIALS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub target: Target,
    pub trials: u64,
    pub seed: Option<u64>,
    pub max_trials: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub target: ValueSource,
    pub trials: ValueSource,
    pub seed: ValueSource,
    pub max_trials: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            target: ValueSource::Default,
            trials: ValueSource::Default,
            seed: ValueSource::Default,
            max_trials: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Target::Straight,
            trials: 100_000,
            seed: None,
            max_trials: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves configuration against an arbitrary variable lookup.
pub fn load_from<F>(var: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let get = |key: &str| var(key).filter(|v| !v.is_empty());

    if let Some(path) = get(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.target {
            cfg.target = v;
            sources.target = ValueSource::File;
        }
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_trials {
            cfg.max_trials = Some(v);
            sources.max_trials = ValueSource::File;
        }
    }

    if let Some(target) = get(TARGET_ENV) {
        cfg.target = target.parse().map_err(ConfigError::Invalid)?;
        sources.target = ValueSource::Env;
    }
    if let Some(trials) = get(TRIALS_ENV) {
        cfg.trials = trials
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid trials".into()))?;
        sources.trials = ValueSource::Env;
    }
    if let Some(seed) = get(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(max) = get(MAX_TRIALS_ENV) {
        cfg.max_trials = Some(
            max.parse()
                .map_err(|_| ConfigError::Invalid("Invalid max_trials".into()))?,
        );
        sources.max_trials = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    target: Option<Target>,
    #[serde(default)]
    trials: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_trials: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >=1".into(),
        ));
    }
    if cfg.max_trials == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_trials must be >=1".into(),
        ));
    }
    Ok(())
}

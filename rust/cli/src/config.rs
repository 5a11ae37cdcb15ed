//! Layered session configuration: defaults, then a TOML file named by
//! `BJLITE_CONFIG`, then `BJLITE_*` environment overrides. Command flags are
//! applied on top by each handler.

use serde::{Deserialize, Serialize};
use std::fs;

use bjlite_engine::rules::{DEALER_STAND_ON, RESHUFFLE_THRESHOLD};

pub const CONFIG_ENV: &str = "BJLITE_CONFIG";
pub const SEED_ENV: &str = "BJLITE_SEED";
pub const STAND_ON_ENV: &str = "BJLITE_STAND_ON";
pub const RESHUFFLE_ENV: &str = "BJLITE_RESHUFFLE_THRESHOLD";
pub const HISTORY_ENV: &str = "BJLITE_HISTORY";

/// Lowest and highest total the automated player may be told to stand on.
pub const MIN_STAND_ON: u8 = 12;
pub const MAX_STAND_ON: u8 = 21;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Total at which `sim` stops hitting.
    pub stand_on: u8,
    pub reshuffle_threshold: usize,
    /// JSONL file that `play` appends resolved rounds to.
    pub history: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            stand_on: DEALER_STAND_ON,
            reshuffle_threshold: RESHUFFLE_THRESHOLD,
            history: None,
        }
    }
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
    pub seed: ValueSource,
    pub stand_on: ValueSource,
    pub reshuffle_threshold: ValueSource,
    pub history: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            stand_on: ValueSource::Default,
            reshuffle_threshold: ValueSource::Default,
            history: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolve configuration reading variables through `lookup` instead of the
/// process environment.
pub fn load_with_sources_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.stand_on {
            cfg.stand_on = v;
            sources.stand_on = ValueSource::File;
        }
        if let Some(v) = f.reshuffle_threshold {
            cfg.reshuffle_threshold = v;
            sources.reshuffle_threshold = ValueSource::File;
        }
        if let Some(v) = f.history {
            cfg.history = Some(v);
            sources.history = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stand_on) = var(STAND_ON_ENV) {
        cfg.stand_on = stand_on.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid {}: {}", STAND_ON_ENV, stand_on))
        })?;
        sources.stand_on = ValueSource::Env;
    }
    if let Some(threshold) = var(RESHUFFLE_ENV) {
        cfg.reshuffle_threshold = threshold.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid {}: {}", RESHUFFLE_ENV, threshold))
        })?;
        sources.reshuffle_threshold = ValueSource::Env;
    }
    if let Some(history) = var(HISTORY_ENV) {
        cfg.history = Some(history);
        sources.history = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    stand_on: Option<u8>,
    #[serde(default)]
    reshuffle_threshold: Option<usize>,
    #[serde(default)]
    history: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_stand_on(cfg.stand_on)?;
    if cfg.reshuffle_threshold > 52 {
        return Err(ConfigError::Invalid(
            "reshuffle_threshold must be <=52".into(),
        ));
    }
    Ok(())
}

pub fn validate_stand_on(stand_on: u8) -> Result<(), ConfigError> {
    if !(MIN_STAND_ON..=MAX_STAND_ON).contains(&stand_on) {
        return Err(ConfigError::Invalid(format!(
            "stand_on must be between {} and {}",
            MIN_STAND_ON, MAX_STAND_ON
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let resolved = load_with_sources_from(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.stand_on, 17);
        assert_eq!(resolved.config.reshuffle_threshold, 14);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_defaults() {
        let resolved = load_with_sources_from(env(&[
            (SEED_ENV, "99"),
            (STAND_ON_ENV, "15"),
            (HISTORY_ENV, "data/rounds.jsonl"),
        ]))
        .unwrap();
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.config.stand_on, 15);
        assert_eq!(resolved.config.history.as_deref(), Some("data/rounds.jsonl"));
        assert_eq!(resolved.sources.stand_on, ValueSource::Env);
        assert_eq!(resolved.sources.reshuffle_threshold, ValueSource::Default);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let resolved = load_with_sources_from(env(&[(SEED_ENV, "")])).unwrap();
        assert_eq!(resolved.config.seed, None);
    }

    #[test]
    fn file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 5\nstand_on = 16\nreshuffle_threshold = 20").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved =
            load_with_sources_from(env(&[(CONFIG_ENV, &path), (SEED_ENV, "6")])).unwrap();
        assert_eq!(resolved.config.seed, Some(6));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.stand_on, 16);
        assert_eq!(resolved.sources.stand_on, ValueSource::File);
        assert_eq!(resolved.config.reshuffle_threshold, 20);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load_with_sources_from(env(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_with_sources_from(env(&[(STAND_ON_ENV, "22")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_with_sources_from(env(&[(RESHUFFLE_ENV, "53")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_unknown_file_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "jokers = true").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            load_with_sources_from(env(&[(CONFIG_ENV, &path)])),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_with_sources_from(env(&[(CONFIG_ENV, "/no/such/bjlite.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("cannot read config file"));
    }
}

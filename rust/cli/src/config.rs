//! Layered table configuration.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `TABLESTAKES_CONFIG`, then `TABLESTAKES_*` environment variables, then
//! command-line flags. Each value remembers which layer set it.

use serde::{Deserialize, Serialize};
use std::fs;
use tablestakes_engine::rules::{BettingStructure, RuleSet};

use crate::cli::RuleArgs;

pub const CONFIG_ENV: &str = "TABLESTAKES_CONFIG";
pub const SEED_ENV: &str = "TABLESTAKES_SEED";
pub const SMALL_BLIND_ENV: &str = "TABLESTAKES_SMALL_BLIND";
pub const BIG_BLIND_ENV: &str = "TABLESTAKES_BIG_BLIND";
pub const STARTING_STACK_ENV: &str = "TABLESTAKES_STARTING_STACK";
pub const STRUCTURE_ENV: &str = "TABLESTAKES_STRUCTURE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    pub structure: BettingStructure,
}

impl Default for Config {
    fn default() -> Self {
        let rules = RuleSet::default();
        Self {
            seed: None,
            small_blind: rules.small_blind,
            big_blind: rules.big_blind,
            starting_stack: rules.starting_stack,
            structure: rules.structure,
        }
    }
}

impl Config {
    /// Rule set for a table built from this configuration.
    pub fn to_rules(&self) -> RuleSet {
        let base = match self.structure {
            BettingStructure::NoLimit => RuleSet::default(),
            BettingStructure::PotLimit => RuleSet::pot_limit(self.small_blind, self.big_blind),
            BettingStructure::FixedLimit => RuleSet::fixed_limit(self.small_blind, self.big_blind),
        };
        RuleSet {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            starting_stack: self.starting_stack,
            ..base
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub starting_stack: ValueSource,
    pub structure: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            starting_stack: ValueSource::Default,
            structure: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of the file and environment layers.
    pub fn apply_overrides(
        &mut self,
        seed: Option<u64>,
        rules: &RuleArgs,
    ) -> Result<(), ConfigError> {
        let cfg = &mut self.config;
        let src = &mut self.sources;
        if let Some(v) = seed {
            cfg.seed = Some(v);
            src.seed = ValueSource::Cli;
        }
        if let Some(v) = rules.small_blind {
            cfg.small_blind = v;
            src.small_blind = ValueSource::Cli;
        }
        if let Some(v) = rules.big_blind {
            cfg.big_blind = v;
            src.big_blind = ValueSource::Cli;
        }
        if let Some(v) = rules.starting_stack {
            cfg.starting_stack = v;
            src.starting_stack = ValueSource::Cli;
        }
        if let Some(v) = &rules.structure {
            cfg.structure = parse_structure(v)?;
            src.structure = ValueSource::Cli;
        }
        validate(cfg)
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
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.structure {
            cfg.structure = parse_structure(&v)?;
            sources.structure = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(parse_number(SEED_ENV, &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(SMALL_BLIND_ENV) {
        cfg.small_blind = parse_number(SMALL_BLIND_ENV, &v)?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value(BIG_BLIND_ENV) {
        cfg.big_blind = parse_number(BIG_BLIND_ENV, &v)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value(STARTING_STACK_ENV) {
        cfg.starting_stack = parse_number(STARTING_STACK_ENV, &v)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_value(STRUCTURE_ENV) {
        cfg.structure = parse_structure(&v)?;
        sources.structure = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    structure: Option<String>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, raw)))
}

fn parse_structure(raw: &str) -> Result<BettingStructure, ConfigError> {
    raw.parse()
        .map_err(|e: tablestakes_engine::errors::GameError| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.to_rules()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_table() {
        let cfg = Config::default();
        let rules = cfg.to_rules();
        assert_eq!(rules, RuleSet::default());
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn overrides_are_tracked_as_cli() {
        let mut resolved = ConfigResolved {
            config: Config::default(),
            sources: ConfigSources::default(),
        };
        let args = RuleArgs {
            big_blind: Some(50),
            small_blind: Some(25),
            structure: Some("pl".into()),
            ..RuleArgs::default()
        };
        resolved.apply_overrides(Some(9), &args).unwrap();
        assert_eq!(resolved.config.seed, Some(9));
        assert_eq!(resolved.sources.big_blind, ValueSource::Cli);
        assert_eq!(resolved.sources.starting_stack, ValueSource::Default);
        let rules = resolved.config.to_rules();
        assert_eq!(rules.structure, BettingStructure::PotLimit);
        assert_eq!(rules.big_blind, 50);
        assert_eq!(rules.starting_stack, 1000);
    }

    #[test]
    fn inverted_blinds_are_rejected() {
        let mut resolved = ConfigResolved {
            config: Config::default(),
            sources: ConfigSources::default(),
        };
        let args = RuleArgs {
            small_blind: Some(10),
            big_blind: Some(5),
            ..RuleArgs::default()
        };
        assert!(matches!(
            resolved.apply_overrides(None, &args),
            Err(ConfigError::Invalid(_))
        ));
    }
}

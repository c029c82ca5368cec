use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

pub const CONFIG_ENV: &str = "TWENTYONE_CONFIG";
pub const SEED_ENV: &str = "TWENTYONE_SEED";
pub const CPU_DELAY_ENV: &str = "TWENTYONE_CPU_DELAY_MS";
pub const AI_ENV: &str = "TWENTYONE_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub cpu_delay_ms: u64,
    pub ai: String,
}

impl Config {
    pub fn cpu_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
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
    pub cpu_delay_ms: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            cpu_delay_ms: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of file and environment values.
    pub fn with_overrides(mut self, seed: Option<u64>, cpu_delay_ms: Option<u64>) -> Self {
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = cpu_delay_ms {
            self.config.cpu_delay_ms = v;
            self.sources.cpu_delay_ms = ValueSource::Cli;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            cpu_delay_ms: 2_000,
            ai: "threshold".into(),
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
        if let Some(v) = f.cpu_delay_ms {
            cfg.cpu_delay_ms = v;
            sources.cpu_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var(CPU_DELAY_ENV)
        && !delay.is_empty()
    {
        cfg.cpu_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid CPU delay: {}", delay)))?;
        sources.cpu_delay_ms = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
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
    cpu_delay_ms: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !twentyone_ai::is_known_ai(&cfg.ai) {
        return Err(ConfigError::Invalid(format!(
            "unknown ai '{}' (available: {})",
            cfg.ai,
            twentyone_ai::AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

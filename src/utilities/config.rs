use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::agent::Agent;
use super::error::ConfigError;
use super::security_level::SecurityLevel;

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub travel_time_ms: u64,
    pub door_open_ms: u64,
    pub door_close_ms: u64,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            travel_time_ms: 1000,
            door_open_ms: 2000,
            door_close_ms: 1000,
        }
    }
}

impl ElevatorConfig {
    /// No simulated latency at all.
    pub fn instant() -> Self {
        ElevatorConfig {
            travel_time_ms: 0,
            door_open_ms: 0,
            door_close_ms: 0,
        }
    }

    pub fn travel_time(&self) -> Duration {
        Duration::from_millis(self.travel_time_ms)
    }

    pub fn door_open_time(&self) -> Duration {
        Duration::from_millis(self.door_open_ms)
    }

    pub fn door_close_time(&self) -> Duration {
        Duration::from_millis(self.door_close_ms)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    pub min_idle_ms: u64,
    pub max_idle_ms: u64,
    pub status_interval_ms: u64,
    /// Stop each agent after this many rides. Runs until stdin closes otherwise.
    pub rides_per_agent: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            min_idle_ms: 2000,
            max_idle_ms: 5000,
            status_interval_ms: 1000,
            rides_per_agent: None,
        }
    }
}

impl DriverConfig {
    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub agents: Vec<Agent>,
    pub driver: DriverConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            elevator: ElevatorConfig::default(),
            agents: vec![
                Agent::new("Agent1", SecurityLevel::Confidential),
                Agent::new("Agent2", SecurityLevel::Secret),
                Agent::new("Agent3", SecurityLevel::TopSecret),
            ],
            driver: DriverConfig::default(),
        }
    }
}

impl Config {
    /// Reads `path` if given. Otherwise tries `config.json`, then
    /// `_config.json`, then falls back to the built-in defaults.
    pub fn get(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let candidates = [PathBuf::from(CONFIG_FILE), PathBuf::from(FALLBACK_CONFIG_FILE)];
                match candidates.iter().find(|candidate| candidate.is_file()) {
                    Some(found) => Self::read(found)?,
                    None => {
                        tracing::warn!("No configuration file provided, using default settings...");
                        Config::default()
                    }
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read configuration");
        Self::parse(path, &contents)
    }

    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agents.is_empty() {
            return Err(ConfigError::Invalid(String::from("at least one agent is required")));
        }
        let mut names = HashSet::new();
        for agent in &self.agents {
            if !names.insert(agent.name.as_str()) {
                return Err(ConfigError::Invalid(format!("agent name {} is used twice", agent.name)));
            }
        }
        if self.driver.min_idle_ms > self.driver.max_idle_ms {
            return Err(ConfigError::Invalid(format!(
                "min_idle_ms ({}) is larger than max_idle_ms ({})",
                self.driver.min_idle_ms, self.driver.max_idle_ms
            )));
        }
        Ok(())
    }
}

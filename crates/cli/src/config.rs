use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::CliError;

pub const LOG_VAR: &str = "BLOCKSQL_LOG";
pub const POLL_VAR: &str = "BLOCKSQL_POLL_MS";

const DEFAULT_LOG: &str = "info";
const DEFAULT_POLL_MS: u64 = 500;

/// Settings for the CLI, taken from the process environment and optionally
/// overridden by a `.env`-style file.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn load(env_file: Option<&str>) -> Result<Self, CliError> {
        let mut env = EnvVars::from_process();
        if let Some(path) = env_file {
            env.load_from_file(path)?;
        }
        Self::from_vars(&env)
    }

    fn from_vars(env: &EnvVars) -> Result<Self, CliError> {
        let log_filter = env.get(LOG_VAR).unwrap_or(DEFAULT_LOG).to_string();

        let poll_ms = match env.get(POLL_VAR) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                CliError::Config(format!(
                    "{POLL_VAR} must be a whole number of milliseconds, got '{raw}'"
                ))
            })?,
            None => DEFAULT_POLL_MS,
        };
        if poll_ms == 0 {
            return Err(CliError::Config(format!("{POLL_VAR} must be greater than zero")));
        }

        Ok(Self {
            log_filter,
            poll_interval: Duration::from_millis(poll_ms),
        })
    }
}

/// Variables loaded from the system and from .env files
#[derive(Debug, Clone, Default)]
struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Load variables from a .env file
    fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars.insert(key.to_string(), unquote(value));
        }

        Ok(())
    }
}

fn unquote(value: &str) -> String {
    let value = value.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }

    value.to_string()
}

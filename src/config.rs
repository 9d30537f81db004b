use actix_web::cookie::Key;

use crate::errors::ConfigError;

const HOST: &str = "GATEHOUSE_HOST";
const PORT: &str = "GATEHOUSE_PORT";
const WORKERS: &str = "GATEHOUSE_WORKERS";
const SESSION_KEY: &str = "GATEHOUSE_SESSION_KEY";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server settings, read from `GATEHOUSE_*` environment variables.
#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub session_key: Key,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: PORT,
                value: value.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let workers = match lookup(WORKERS) {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidWorkers {
                        name: WORKERS,
                        value,
                    })
                }
            },
            None => num_cpus::get() * 2,
        };

        let session_key = match lookup(SESSION_KEY) {
            Some(value) => {
                Key::try_from(value.as_bytes()).map_err(|_| ConfigError::SessionKeyTooShort {
                    name: SESSION_KEY,
                    len: value.len(),
                })?
            }
            None => {
                log::warn!(
                    "{} not set, using a random key; sessions end when the server restarts",
                    SESSION_KEY
                );
                Key::generate()
            }
        };

        Ok(Self {
            host,
            port,
            workers,
            session_key,
        })
    }
}

/// Default maximum bytes per JSON-RPC message (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PERCHANCE_SEED must be an unsigned 64-bit integer, got {0:?}")]
    InvalidSeed(String),
    #[error("PERCHANCE_MAX_MESSAGE_BYTES must be a positive integer, got {0:?}")]
    InvalidMaxMessageBytes(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Fixed seed for option draws; `None` means fresh entropy.
    pub rng_seed: Option<u64>,
    pub max_message_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `PERCHANCE_SEED` (optional) — seed for reproducible output
    /// - `PERCHANCE_MAX_MESSAGE_BYTES` (optional, default 1 MiB) — max bytes per request line
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rng_seed = match lookup("PERCHANCE_SEED") {
            Some(val) => Some(
                val.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(val.clone()))?,
            ),
            None => None,
        };

        let max_message_bytes = match lookup("PERCHANCE_MAX_MESSAGE_BYTES") {
            Some(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxMessageBytes(val)),
            },
            None => DEFAULT_MAX_MESSAGE_BYTES,
        };

        Ok(Self {
            rng_seed,
            max_message_bytes,
        })
    }
}

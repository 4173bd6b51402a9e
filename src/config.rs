use std::env;
use std::time::Duration;

use log::warn;

use crate::ids::{IdGenerator, SequentialIds, UuidIds};

/// How fresh comment and post ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Uuid,
    /// Counter starting above every seeded id.
    Sequential,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => Box::new(SequentialIds::starting_at(1000)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub frontend_origin: String,
    pub acting_user: String,
    pub loading_delay: Duration,
    pub low_data_mode: bool,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            frontend_origin: "http://localhost:3000".to_string(),
            acting_user: "You".to_string(),
            loading_delay: Duration::from_millis(1500),
            low_data_mode: false,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Config::default();

        let loading_delay = env::var("LOADING_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.loading_delay);
        let low_data_mode = env::var("LOW_DATA_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or(false);
        let id_strategy = match env::var("ID_STRATEGY").as_deref() {
            Ok("sequential") => IdStrategy::Sequential,
            Ok("uuid") | Err(_) => IdStrategy::Uuid,
            Ok(other) => {
                warn!("Unknown ID_STRATEGY {:?}, using uuid", other);
                IdStrategy::Uuid
            }
        };

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            frontend_origin: env::var("FRONTEND_ORIGIN").unwrap_or(defaults.frontend_origin),
            acting_user: env::var("ACTING_USER").unwrap_or(defaults.acting_user),
            loading_delay,
            low_data_mode,
            id_strategy,
        }
    }
}

use std::sync::{Mutex, MutexGuard};

use crate::config::Config;
use crate::error::ApiError;
use crate::ids::SystemClock;
use crate::navigation::Navigator;
use crate::store::ContentStore;

pub struct AppState {
    pub store: Mutex<ContentStore>,
    pub navigator: Mutex<Navigator>,
    pub config: Config,
}

impl AppState {
    /// Seeded store plus a navigator on the feed. Must run inside the async
    /// runtime for the loading delay to be honoured.
    pub fn init(config: Config) -> Self {
        let store = ContentStore::seeded(
            config.acting_user.clone(),
            config.id_strategy.generator(),
            Box::new(SystemClock),
        );
        let navigator = Navigator::new(config.loading_delay, config.low_data_mode);
        AppState {
            store: Mutex::new(store),
            navigator: Mutex::new(navigator),
            config,
        }
    }

    pub fn store(&self) -> Result<MutexGuard<'_, ContentStore>, ApiError> {
        self.store.lock().map_err(|_| ApiError::Poisoned)
    }

    pub fn navigator(&self) -> Result<MutexGuard<'_, Navigator>, ApiError> {
        self.navigator.lock().map_err(|_| ApiError::Poisoned)
    }
}

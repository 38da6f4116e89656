use crate::core::AppConfig;
use crate::relay::Relay;

/// Shared application state. Read-only after startup, so it is shared
/// as a plain `Arc` with no locking.
pub struct AppState {
    pub relay: Relay,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            relay: Relay::new(&config),
            config,
        }
    }
}

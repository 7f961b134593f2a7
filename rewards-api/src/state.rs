//! Application state for the API server

use rewards_core::Ledger;
use std::sync::Arc;
use tokio::sync::RwLock;

/// API server state
///
/// The ledger sits behind one `RwLock`: each credit/spend holds the write
/// lock for its full duration, so no spend is ever partially applied
/// across interleaved requests.
#[derive(Clone)]
pub struct AppState {
    /// The single account's ledger
    pub ledger: Arc<RwLock<Ledger>>,
    /// API version
    pub version: String,
}

impl AppState {
    /// Create new app state with an empty ledger
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger::new())),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

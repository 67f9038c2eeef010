//! Host-facing job search component: configuration, logging and the
//! controller that wires the core state machine to the engine.
mod config;
mod controller;
mod effects;
pub mod logging;

pub use config::{
    SearchConfig, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CONNECT_TIMEOUT_SECS,
    ENV_MAX_RESPONSE_BYTES, ENV_REQUEST_TIMEOUT_SECS,
};
pub use controller::SearchController;
pub use effects::EffectRunner;

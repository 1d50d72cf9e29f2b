//! SpendTrack HTTP server.
//!
//! Everything here is wiring: domain behavior lives in `spendtrack-core`,
//! persistence in `spendtrack-storage-sqlite`. The server builds the service
//! graph once at startup and exposes it over a JSON API.

pub mod api;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};

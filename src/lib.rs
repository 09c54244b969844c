//! song-scout library: prompt-to-playlist suggestion server.
//!
//! The binary in `main.rs` is a thin clap wrapper; everything routable lives
//! here so the HTTP surface can be driven by the integration tests.

pub mod config;
pub mod gemini;
pub mod http_server;
pub mod logging;
pub mod ports;
pub mod spotify;
pub mod suggest;

pub use http_server::app::{HttpServerConfig, build_router, build_state, start};
pub use http_server::state::AppState;

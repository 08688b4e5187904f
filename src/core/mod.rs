//! Core Module
//!
//! Server configuration, shared state, and the HTTP server itself:
//!
//! - [`Config`] loads environment-driven settings
//! - [`ServerState`] holds the database and JWT service
//! - [`Server`] binds and runs the HTTP listener

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;

pub mod catalog;
pub mod cli_args;
pub mod config;
pub mod error;
mod middleware;
mod route;
pub mod server;
pub mod state;
pub mod telemetry;

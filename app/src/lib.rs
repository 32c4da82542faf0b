pub mod app;
pub mod bootstrap;
pub mod config;
pub mod notifier;
pub mod server;
pub mod services;

pub use bootstrap::{init_foundation, init_tracing};

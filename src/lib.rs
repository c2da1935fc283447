pub mod config;
pub mod inventory;
pub mod observability;

pub use config::Config;

//! Blocking client for the PUBG Tracker player statistics API.

pub mod analysis;
pub mod api;
pub mod config;
pub mod display;
pub mod error;

pub use analysis::stats_table::{StatsFilter, StatsTable};
pub use api::client::TrackerClient;
pub use config::Config;
pub use error::AppError;

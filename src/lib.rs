pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::engine::DeployEngine;
pub use utils::error::{DeployError, Result};

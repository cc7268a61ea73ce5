pub mod engine;

pub use crate::utils::error::Result;

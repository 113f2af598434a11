pub mod config;
pub mod error;
pub mod minimize;
pub mod objective;
pub mod placement;

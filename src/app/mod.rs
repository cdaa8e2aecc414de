// src/app/mod.rs
pub mod config;
pub mod history;
pub mod passguard;
pub mod presets;
pub mod theme;

pub use config::Config;
pub use passguard::{AppError, PassGuard};

// src/analysis/mod.rs
pub mod entropy;
pub mod strength;

pub use entropy::estimate_crack_time;
pub use strength::evaluate;

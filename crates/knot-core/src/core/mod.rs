//! Foundational layer: stateless data models and pure geometry.

pub mod models;
pub mod utils;

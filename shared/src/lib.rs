//! Shared types and models for the Logistics & Inventory Dashboard
//!
//! This crate contains types shared between the dashboard client, the
//! browser (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

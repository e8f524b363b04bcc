//! Student Registry Library
//!
//! This library crate holds everything the binary (`main.rs`) wires together.
//!
//! ## Modules
//! - **`config`**: Listen address and log level, resolved from flags and environment.
//! - **`students`**: The student record store, the service enforcing the percentage
//!   rule, and the Axum handlers exposing five CRUD routes.

pub mod config;
pub mod students;

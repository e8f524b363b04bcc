//! Student Records Module
//!
//! CRUD over student records held in memory and keyed by roll number.
//!
//! ## Layers
//! - **`store`**: The `DashMap`-backed table. Absence is a value, never an error.
//! - **`service`**: Applies the percentage rule on update and reports missing keys.
//! - **`handlers`**: Axum handlers and the route table; turns `StudentError` into status codes.
//! - **`protocol`**: Route paths and fixed response messages.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod service;
pub mod store;
pub mod types;

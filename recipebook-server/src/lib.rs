//! recipebook-server: HTTP CRUD service for the recipes table
//!
//! Exposes one relational table through REST endpoints. Each route is a
//! direct mapping to a single parameterized SQL statement; there is no
//! business logic between the router and the database.

pub mod db;
pub mod http;
pub mod models;

pub use http::{ApiError, AppState, ServerConfig};

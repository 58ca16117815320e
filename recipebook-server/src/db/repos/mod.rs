//! Repository implementations for database access

pub mod recipes;

pub use recipes::{DbError, RecipeRepo};

//! Domain models shared by the repository and HTTP layers

pub mod recipe;

pub use recipe::{Recipe, RecipeDraft};

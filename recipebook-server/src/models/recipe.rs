//! Recipe entity and request body mapping
//!
//! The wire shape keeps the PascalCase keys the service has always
//! exposed (`ID`, `Name`, `Ingredients`, `Instructions`); storage uses
//! snake_case columns.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A recipe row as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

/// Incoming recipe fields for add and update requests.
///
/// Every field defaults to the empty string: updates are full
/// overwrites, so an omitted field clears the stored value. An `ID`
/// key in the body is ignored; storage assigns ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
}

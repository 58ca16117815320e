//! Recipe repository
//!
//! One parameterized statement per method. Mutations detect
//! row-not-found by inspecting rows_affected.

use sqlx::PgPool;

use crate::models::{Recipe, RecipeDraft};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("recipe {id} not found")]
    NotFound { id: i64 },
}

/// Recipe repository
pub struct RecipeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RecipeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every recipe, lowest id first.
    pub async fn list(&self) -> Result<Vec<Recipe>, DbError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, ingredients, instructions FROM recipes ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(recipes)
    }

    /// Point lookup by primary key.
    pub async fn get(&self, id: i64) -> Result<Recipe, DbError> {
        sqlx::query_as::<_, Recipe>(
            "SELECT id, name, ingredients, instructions FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }

    /// Insert a new recipe, returning the storage-assigned id.
    pub async fn create(&self, draft: &RecipeDraft) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO recipes (name, ingredients, instructions) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.ingredients)
        .bind(&draft.instructions)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite all three text fields of the row matching id.
    pub async fn update(&self, id: i64, draft: &RecipeDraft) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE recipes SET name = $1, ingredients = $2, instructions = $3 WHERE id = $4",
        )
        .bind(&draft.name)
        .bind(&draft.ingredients)
        .bind(&draft.instructions)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }

    /// Delete the row matching id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }
        Ok(())
    }
}

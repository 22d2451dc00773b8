//! Author domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
};

impl Repository {
    /// List all authors
    pub async fn authors_list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create author
    pub async fn authors_create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES (?) RETURNING id, name",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

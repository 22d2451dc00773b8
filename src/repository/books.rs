//! Book domain methods on Repository

use super::{constraint_error, Repository};
use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

impl Repository {
    /// List all books
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, year, author_id FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, year, author_id FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create book
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, year, author_id)
            VALUES (?, ?, ?)
            RETURNING id, title, year, author_id
            "#,
        )
        .bind(&data.title)
        .bind(data.year)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            constraint_error(
                e,
                &format!("Book author_id {} references a record that does not exist", data.author_id),
                "Book already exists",
            )
        })
    }

    /// Delete book (its reviews cascade), returning the removed row
    pub async fn books_delete(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "DELETE FROM books WHERE id = ? RETURNING id, title, year, author_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

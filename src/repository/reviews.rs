//! Review domain methods on Repository

use super::{constraint_error, Repository};
use crate::{
    error::AppResult,
    models::review::{CreateReview, Review},
};

impl Repository {
    /// Create a review on behalf of `user_id`
    pub async fn reviews_create(&self, data: &CreateReview, user_id: i64) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (book_id, user_id, rating, text)
            VALUES (?, ?, ?, ?)
            RETURNING id, book_id, user_id, rating, text
            "#,
        )
        .bind(data.book_id)
        .bind(user_id)
        .bind(data.rating)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            constraint_error(
                e,
                &format!("Review book_id {} references a record that does not exist", data.book_id),
                "Review already exists",
            )
        })
    }

    /// Mean rating of a book's reviews; None when there are none
    pub async fn reviews_average_rating(&self, book_id: i64) -> AppResult<Option<f64>> {
        let avg: Option<f64> =
            sqlx::query_scalar("SELECT AVG(rating) FROM reviews WHERE book_id = ?")
                .bind(book_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(avg)
    }
}

//! Review model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Review record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    /// Author of the review, always taken from the bearer token
    pub user_id: i64,
    pub rating: i64,
    pub text: String,
}

/// Create review request
///
/// There is no `user_id` field: any such key in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub rating: i64,
    pub text: String,
    pub book_id: i64,
}

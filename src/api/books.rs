//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRating, CreateBook},
    AppState,
};

use super::MessageResponse;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Invalid input or unknown author")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(book), _): WithRejection<Json<CreateBook>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.create_book(book).await?;
    Ok(Json(book))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Delete a book and its reviews
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Book '{}' deleted successfully.", deleted.title),
    }))
}

/// Average review rating of a book
#[utoipa::path(
    get,
    path = "/books/{id}/rating",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Average rating, null without reviews", body = BookRating)
    )
)]
pub async fn book_rating(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<BookRating>> {
    let rating = state.services.catalog.get_book_rating(id).await?;
    Ok(Json(rating))
}

//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor},
        book::{Book, BookRating, CreateBook},
        review::{CreateReview, Review},
        user::{CreateUser, User},
    },
    repository::Repository,
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;

        if self.repository.users_username_exists(&user.username).await? {
            return Err(AppError::BadRequest("Username already registered".to_string()));
        }

        let password_hash = hash_password(&user.password)?;
        let created = self.repository.users_create(&user.username, &password_hash).await?;

        tracing::info!("Registered user {} (id={})", created.username, created.id);
        Ok(created)
    }

    /// Delete a user and their reviews
    pub async fn delete_user(&self, username: &str) -> AppResult<User> {
        let deleted = self
            .repository
            .users_delete_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with name '{}' not found", username)))?;

        tracing::info!("Deleted user {} (id={})", deleted.username, deleted.id);
        Ok(deleted)
    }

    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;
        self.repository.authors_create(&author).await
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors_list().await
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        self.repository.books_create(&book).await
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id '{}' not found", id)))
    }

    /// Delete a book and its reviews
    pub async fn delete_book(&self, id: i64) -> AppResult<Book> {
        let deleted = self
            .repository
            .books_delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id '{}' not found", id)))?;

        tracing::info!("Deleted book '{}' (id={})", deleted.title, deleted.id);
        Ok(deleted)
    }

    /// Create a review authored by `user_id`
    pub async fn create_review(&self, review: CreateReview, user_id: i64) -> AppResult<Review> {
        review.validate()?;
        self.repository.reviews_create(&review, user_id).await
    }

    /// Average rating; `None` for a missing book or one without reviews
    pub async fn get_book_rating(&self, book_id: i64) -> AppResult<BookRating> {
        let rating = self.repository.reviews_average_rating(book_id).await?;
        Ok(BookRating { rating })
    }
}

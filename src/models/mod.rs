//! Data models for Bookshelf

pub mod author;
pub mod book;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use author::{Author, CreateAuthor};
pub use book::{Book, BookRating, CreateBook};
pub use review::{CreateReview, Review};
pub use user::{AccessToken, CreateUser, TokenClaims, User, UserInfo};

//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, books, health, reviews, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Book catalog and review REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        // Users
        users::delete_user,
        // Authors
        authors::list_authors,
        authors::create_author,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
        books::book_rating,
        // Reviews
        reviews::create_review,
    ),
    components(
        schemas(
            auth::LoginForm,
            crate::models::user::CreateUser,
            crate::models::user::UserInfo,
            crate::models::user::AccessToken,
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::BookRating,
            crate::models::review::Review,
            crate::models::review::CreateReview,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and tokens"),
        (name = "users", description = "User management"),
        (name = "authors", description = "Authors"),
        (name = "books", description = "Books and ratings"),
        (name = "reviews", description = "Reviews")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

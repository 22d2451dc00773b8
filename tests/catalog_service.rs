//! Catalog service behavior against an in-memory database

mod common;

use bookshelf_server::{
    models::{
        author::CreateAuthor,
        book::{BookRating, CreateBook},
        review::CreateReview,
        user::CreateUser,
    },
    AppError,
};

use common::test_state;

#[tokio::test]
async fn test_catalog_lifecycle() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    let user = catalog
        .create_user(CreateUser {
            username: "reader".into(),
            password: "testpass".into(),
        })
        .await
        .unwrap();
    assert_ne!(user.password_hash, "testpass");

    let author = catalog
        .create_author(CreateAuthor { name: "Fyodor Dostoevsky".into() })
        .await
        .unwrap();
    let book = catalog
        .create_book(CreateBook {
            title: "The Idiot".into(),
            year: 1869,
            author_id: author.id,
        })
        .await
        .unwrap();

    assert_eq!(catalog.list_authors().await.unwrap().len(), 1);
    assert_eq!(catalog.list_books().await.unwrap()[0].title, "The Idiot");
    assert_eq!(
        catalog.get_book_rating(book.id).await.unwrap(),
        BookRating { rating: None }
    );

    for rating in [2, 5] {
        let review = catalog
            .create_review(
                CreateReview {
                    rating,
                    text: "Read it twice".into(),
                    book_id: book.id,
                },
                user.id,
            )
            .await
            .unwrap();
        assert_eq!(review.user_id, user.id);
    }
    assert_eq!(
        catalog.get_book_rating(book.id).await.unwrap(),
        BookRating { rating: Some(3.5) }
    );

    let deleted = catalog.delete_book(book.id).await.unwrap();
    assert_eq!(deleted.title, "The Idiot");
    assert!(matches!(catalog.get_book(book.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(catalog.delete_book(book.id).await, Err(AppError::NotFound(_))));

    let deleted = catalog.delete_user("reader").await.unwrap();
    assert_eq!(deleted.id, user.id);
    assert!(matches!(catalog.delete_user("reader").await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_ratings_are_not_bounded() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    let user = catalog
        .create_user(CreateUser {
            username: "critic".into(),
            password: "testpass".into(),
        })
        .await
        .unwrap();
    let author = catalog
        .create_author(CreateAuthor { name: "Anton Chekhov".into() })
        .await
        .unwrap();
    let book = catalog
        .create_book(CreateBook {
            title: "The Seagull".into(),
            year: 1896,
            author_id: author.id,
        })
        .await
        .unwrap();

    for rating in [-3, 11] {
        catalog
            .create_review(
                CreateReview {
                    rating,
                    text: String::new(),
                    book_id: book.id,
                },
                user.id,
            )
            .await
            .unwrap();
    }

    assert_eq!(catalog.get_book_rating(book.id).await.unwrap().rating, Some(4.0));
}

#[tokio::test]
async fn test_validation_rejects_empty_names() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    assert!(matches!(
        catalog.create_author(CreateAuthor { name: String::new() }).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        catalog
            .create_user(CreateUser {
                username: "reader".into(),
                password: String::new(),
            })
            .await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_duplicate_insert_matches_registration_message() {
    let state = test_state().await;
    state.repository.users_create("reader", "hash").await.unwrap();

    let err = state.repository.users_create("reader", "hash").await.unwrap_err();
    assert!(
        matches!(err, AppError::BadRequest(ref msg) if msg == "Username already registered"),
        "unexpected error: {:?}",
        err
    );
}

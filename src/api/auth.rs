//! Registration and token endpoints

use axum::{extract::State, Form, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::user::{AccessToken, CreateUser, UserInfo},
    AppState,
};

/// OAuth2 password-flow form
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User registered", body = UserInfo),
        (status = 400, description = "Invalid input or username already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(user), _): WithRejection<Json<CreateUser>, AppError>,
) -> AppResult<Json<UserInfo>> {
    let created = state.services.catalog.create_user(user).await?;
    Ok(Json(created.into()))
}

/// Exchange username and password for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token", body = AccessToken),
        (status = 401, description = "Incorrect username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<LoginForm>, AppError>,
) -> AppResult<Json<AccessToken>> {
    let token = state.services.auth.login(&form.username, &form.password).await?;
    Ok(Json(token))
}

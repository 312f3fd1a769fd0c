//! User handlers.
//!
//! One endpoint, dispatched on the HTTP method.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use common::{AppError, AppResult};
use domain::User;

use crate::state::AppState;

/// Raw query string pairs. Repeated keys keep the last value and never reject.
type QueryParams = HashMap<String, String>;

/// Query parameters selecting a user by key
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email of the user to read or delete
    pub email: Option<String>,
}

impl EmailQuery {
    /// Email parameter, treating an empty value as absent
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

impl From<QueryParams> for EmailQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            email: params.remove("email"),
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(get_users)
            .post(create_user)
            .put(update_user)
            .delete(delete_user)
            // an explicit HEAD handler keeps GET from answering it
            .head(unhandled_method)
            .fallback(unhandled_method),
    )
}

/// Get one user by email, or every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "The user when `email` is given (empty fields if absent), otherwise every user", body = [User]),
        (status = 400, description = "Record could not be fetched or decoded")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<Response> {
    let query = EmailQuery::from(params);
    match query.email() {
        Some(email) => {
            // absent keys keep the historical zero-value body
            let user = state.user_service.fetch_user(email).await?.unwrap_or_default();
            Ok(Json(user).into_response())
        }
        None => {
            let users = state.user_service.fetch_users().await?;
            Ok(Json(users).into_response())
        }
    }
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid body or email, user already exists, or write failed")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace an existing user
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Invalid body, user does not exist, or write failed")
    )
)]
pub async fn update_user(State(state): State<AppState>, body: Bytes) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(&body).await?;
    Ok(Json(user))
}

/// Delete a user by email
#[utoipa::path(
    delete,
    path = "/users",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User deleted (or was never there)"),
        (status = 400, description = "Delete failed")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<StatusCode> {
    let query = EmailQuery::from(params);
    state
        .user_service
        .delete_user(query.email().unwrap_or_default())
        .await?;

    Ok(StatusCode::OK)
}

/// Any other method gets the fixed unhandled-method response
pub async fn unhandled_method(method: Method) -> AppError {
    debug!(%method, "Unhandled method");
    AppError::MethodNotAllowed
}

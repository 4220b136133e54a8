//! User registration and admin lookup handlers.

use actix_web::{HttpResponse, web};
use serde_json::json;

use newsx_shared::CreatedResponse;
use newsx_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let outcome = state.users.create_user(body.into_inner().into()).await?;

    tracing::info!(user_id = %outcome.inserted_id, "User created");

    Ok(HttpResponse::Created().json(CreatedResponse::new("User created successfully", outcome)))
}

/// GET /user/{name}
pub async fn get_admin_by_name(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> AppResult<HttpResponse> {
    let admin = state.users.find_admin_by_name(&name).await?;
    Ok(HttpResponse::Ok().json(admin))
}

/// GET /admin/{email}
///
/// An unknown email is answered with `{}` and 200, not 404.
pub async fn get_admin_by_email(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> AppResult<HttpResponse> {
    match state.users.find_admin_by_email(&email).await? {
        Some(admin) => Ok(HttpResponse::Ok().json(admin)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

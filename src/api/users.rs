use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};

use crate::models::{CreateUserRequest, CreateUserResponse, DeleteUserResponse, UserResponse};
use crate::services::{user_service, UserStore};
use crate::utils::{AppError, ErrorResponse};

/// Body extractor config: any malformed or mistyped payload becomes a 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️ Rejected user payload: {}", err);
        AppError::Validation(err.to_string()).into()
    })
}

/// Mounts the `/users` routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .app_data(json_config())
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// POST /users - Creates a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 422, description = "Malformed payload", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let request = CreateUserRequest::try_from(body.into_inner()).map_err(|e| {
        log::warn!("⚠️ Rejected user payload: {}", e);
        AppError::Validation(e.to_string())
    })?;
    let id = user_service::create_user(store.get_ref(), request).await?;

    log::info!("✅ User created: {}", id);
    Ok(HttpResponse::Ok().json(CreateUserResponse { id }))
}

/// GET /users - Lists every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(store.get_ref()).await?;

    log::debug!("📋 Listed {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id} - Fetches one user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    match user_service::get_user(store.get_ref(), &user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::warn!("⚠️ GET /users/{} failed: {}", user_id, e);
            Err(e)
        }
    }
}

/// DELETE /users/{id} - Deletes one user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id (24 hex characters)")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    match user_service::delete_user(store.get_ref(), &user_id).await {
        Ok(()) => {
            log::info!("🗑️ User deleted: {}", user_id);
            Ok(HttpResponse::Ok().json(DeleteUserResponse {
                status: "User deleted".to_string(),
            }))
        }
        Err(e) => {
            log::warn!("⚠️ DELETE /users/{} failed: {}", user_id, e);
            Err(e)
        }
    }
}

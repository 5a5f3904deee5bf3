use crate::models::{CreateUserRequest, User, UserId, UserResponse};
use crate::services::UserStore;
use crate::utils::AppError;

pub const USER_NOT_FOUND: &str = "User not found";

/// Inserts a new user and returns its identifier in string form.
pub async fn create_user(store: &dyn UserStore, request: CreateUserRequest) -> Result<String, AppError> {
    let id = store.insert_one(User::from(request)).await?;
    Ok(id.to_string())
}

/// Every stored user, fully materialized. No sort and no paging.
pub async fn list_users(store: &dyn UserStore) -> Result<Vec<UserResponse>, AppError> {
    let users = store.find_all().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn get_user(store: &dyn UserStore, raw_id: &str) -> Result<UserResponse, AppError> {
    let id: UserId = raw_id.parse()?;

    store
        .find_one(&id)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
}

pub async fn delete_user(store: &dyn UserStore, raw_id: &str) -> Result<(), AppError> {
    let id: UserId = raw_id.parse()?;

    if store.delete_one(&id).await? == 0 {
        return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
    }
    Ok(())
}

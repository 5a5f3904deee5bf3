use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Records Service API",
        version = "1.0.0",
        description = "Create, list, fetch and delete user records stored in MongoDB.\n\nIdentifiers are 24-character hex strings assigned by the database."
    ),
    paths(
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::delete_user,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::CreateUserResponse,
            crate::models::UserResponse,
            crate::models::DeleteUserResponse,
            crate::utils::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User record CRUD backed by the document store."),
        (name = "Health", description = "Liveness and database connectivity."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_user_route() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}

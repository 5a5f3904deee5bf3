use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::UserId;

/// User document as stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
}

/// Fields supplied by the client on creation. Anything else in the body is dropped.
///
/// Only built from a JSON object (see the `TryFrom` below); a positional array
/// such as `["Ada", 30]` is not a valid payload.
#[derive(Debug, Serialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = 30)]
    pub age: i64,
}

#[derive(Deserialize)]
struct CreateUserFields {
    name: String,
    age: i64,
}

impl TryFrom<Map<String, Value>> for CreateUserRequest {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: CreateUserFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            name: fields.name,
            age: fields.age,
        })
    }
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            age: req.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| UserId::from(oid).to_string()).unwrap_or_default(),
            name: user.name,
            age: user.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "User deleted")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    fn parse(raw: &str) -> Result<CreateUserRequest, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        CreateUserRequest::try_from(object)
    }

    #[test]
    fn create_request_ignores_extra_fields() {
        let req = parse(r#"{"name":"Ada","age":30,"admin":true}"#).unwrap();

        assert_eq!(req, CreateUserRequest { name: "Ada".into(), age: 30 });
    }

    #[test]
    fn create_request_rejects_non_integer_age() {
        assert!(parse(r#"{"name":"Ada","age":30.5}"#).is_err());
        assert!(parse(r#"{"name":"Ada","age":"30"}"#).is_err());
        assert!(parse(r#"{"name":"Ada"}"#).is_err());
    }

    #[test]
    fn create_request_rejects_positional_array() {
        assert!(parse(r#"["Ada",30]"#).is_err());
    }

    #[test]
    fn new_user_document_has_no_id_field() {
        let user = User::from(CreateUserRequest { name: "Ada".into(), age: 30 });
        let document = bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("name").unwrap(), "Ada");
    }

    #[test]
    fn reads_documents_with_int32_age() {
        let oid = ObjectId::new();
        let user: User = bson::from_document(doc! { "_id": oid, "name": "Ada", "age": 30_i32 }).unwrap();
        let response = UserResponse::from(user);

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.age, 30);
    }
}

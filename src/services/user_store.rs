use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::Collection;

use crate::database::MongoDB;
use crate::models::{User, UserId};
use crate::utils::AppError;

/// The document operations the user service needs, one store round trip each.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists `user` and returns the identifier the store assigned.
    async fn insert_one(&self, user: User) -> Result<UserId, AppError>;

    /// All documents in the store's natural order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    async fn find_one(&self, id: &UserId) -> Result<Option<User>, AppError>;

    /// Returns the number of documents removed (0 or 1).
    async fn delete_one(&self, id: &UserId) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoUserStore {
    db: MongoDB,
    users: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: MongoDB, collection: &str) -> Self {
        let users = db.collection::<User>(collection);
        Self { db, users }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_one(&self, user: User) -> Result<UserId, AppError> {
        let result = self.users.insert_one(&user).await?;

        result
            .inserted_id
            .as_object_id()
            .map(UserId::from)
            .ok_or_else(|| {
                AppError::Database(format!("unexpected inserted _id: {}", result.inserted_id))
            })
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        // Read raw documents so one foreign-shaped record cannot fail the whole listing
        let cursor = self.users.clone_with_type::<Document>().find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(decode_users(documents))
    }

    async fn find_one(&self, id: &UserId) -> Result<Option<User>, AppError> {
        let user = self
            .users
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(user)
    }

    async fn delete_one(&self, id: &UserId) -> Result<u64, AppError> {
        let result = self
            .users
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await?;
        Ok(())
    }
}

/// Decodes each document into a `User`, skipping (and logging) those that do not fit.
fn decode_users(documents: Vec<Document>) -> Vec<User> {
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get("_id").map(ToString::to_string);
            match bson::from_document::<User>(document) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!(
                        "⚠️ Skipping user document {} that does not decode: {}",
                        id.as_deref().unwrap_or("<no _id>"),
                        e
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn undecodable_documents_are_skipped() {
        let good = ObjectId::new();
        let documents = vec![
            doc! { "_id": good, "name": "Ada", "age": 30 },
            doc! { "_id": ObjectId::new(), "name": "Alan", "age": 41.5 },
            doc! { "_id": ObjectId::new(), "age": 12 },
        ];

        let users = decode_users(documents);

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, Some(good));
        assert_eq!(users[0].name, "Ada");
    }

    #[test]
    fn keeps_store_order() {
        let documents = vec![
            doc! { "_id": ObjectId::new(), "name": "B", "age": 2_i64 },
            doc! { "_id": ObjectId::new(), "name": "A", "age": 1_i32 },
        ];

        let names: Vec<String> = decode_users(documents).into_iter().map(|u| u.name).collect();

        assert_eq!(names, vec!["B", "A"]);
    }
}

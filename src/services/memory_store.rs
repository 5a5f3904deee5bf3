use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::UserStore;
use crate::models::{User, UserId};
use crate::utils::AppError;

/// `UserStore` kept in a Vec, for handler and service tests.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    offline: AtomicBool,
}

impl InMemoryUserStore {
    /// Every following call fails as if the database were unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Database("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_one(&self, mut user: User) -> Result<UserId, AppError> {
        self.check_online()?;
        let id = UserId::new();
        user.id = Some(id.as_object_id());
        self.users.write().await.push(user);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.check_online()?;
        Ok(self.users.read().await.clone())
    }

    async fn find_one(&self, id: &UserId) -> Result<Option<User>, AppError> {
        self.check_online()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.id == Some(id.as_object_id()))
            .cloned())
    }

    async fn delete_one(&self, id: &UserId) -> Result<u64, AppError> {
        self.check_online()?;
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == Some(id.as_object_id())) {
            Some(idx) => {
                users.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

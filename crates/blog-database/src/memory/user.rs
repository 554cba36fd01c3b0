//! In-memory user store using `dashmap`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use blog_core::error::AppError;
use blog_core::result::AppResult;
use blog_entity::user::{CreateUser, User, UserRole};

use crate::store::UserStore;

/// Concurrent in-memory user store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Users keyed by ID.
    users: Arc<DashMap<Uuid, User>>,
    /// Lowercased email to user ID, guarding uniqueness.
    emails: Arc<DashMap<String, Uuid>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed user, replacing any user with the same ID.
    pub fn insert(&self, user: User) {
        self.emails.insert(user.email.to_lowercase(), user.id);
        self.users.insert(user.id, user);
    }

    /// Remove a user by ID. Returns the removed user, if any.
    pub fn remove(&self, id: Uuid) -> Option<User> {
        let (_, user) = self.users.remove(&id)?;
        self.emails.remove(&user.email.to_lowercase());
        Some(user)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|e| *e.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|entry| entry.value().role == role)
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let id = Uuid::now_v7();
        match self.emails.entry(data.email.to_lowercase()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict("User already exists with this email"));
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let user = User {
            id,
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            photo: data.photo.clone(),
            education: data.education.clone(),
            role: data.role,
            password_hash: data.password_hash.clone(),
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }
}

//! User service for registration and user management

use crate::error::ApiError;
use crate::repositories::{is_unique_violation, CreateUser, UserRecord, UserRepository};
use fitness_tracker_shared::validation::validate_search_term;
use fitness_tracker_shared::{
    MessageResponse, PageQuery, RegisterUserRequest, UpdateUserRequest, UserResponse, UserRole,
    UserSearchQuery,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Number of token characters that may appear in logs
const TOKEN_LOG_PREFIX: usize = 10;

/// User service for user record operations
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new user with the default role
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, ApiError> {
        request.validate()?;

        let email = request.email.trim().to_string();
        info!(%email, "Registering user");

        if self
            .users
            .email_exists(&email)
            .await
            .map_err(ApiError::Internal)?
        {
            warn!(%email, "Registration rejected, email already exists");
            return Err(ApiError::InvalidInput("Email already exists".to_string()));
        }

        // A concurrent registration can still win the race to the unique index
        let user = self
            .users
            .create(CreateUser {
                email,
                password: request.password,
                first_name: request.first_name,
                last_name: request.last_name,
                role: UserRole::User,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::InvalidInput("Email already exists".to_string())
                } else {
                    ApiError::Internal(e)
                }
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(to_response(user))
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserResponse, ApiError> {
        self.find(user_id).await.map(to_response)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserResponse, ApiError> {
        self.users
            .find_by_email(email)
            .await
            .map_err(ApiError::Internal)?
            .map(to_response)
            .ok_or_else(|| ApiError::NotFound(format!("User not found with email: {}", email)))
    }

    /// Apply the fields present in `request`, leaving the rest untouched
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        request.validate()?;

        let mut user = self.find(user_id).await?;
        if let Some(first_name) = request.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = request.role {
            user.role = role;
        }

        let updated = self.users.update(&user).await.map_err(ApiError::Internal)?;
        info!(%user_id, "User updated");
        Ok(to_response(updated))
    }

    pub async fn delete_user(&self, user_id: Uuid) -> Result<MessageResponse, ApiError> {
        let deleted = self
            .users
            .delete(user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(not_found(user_id));
        }

        info!(%user_id, "User deleted");
        Ok(MessageResponse::new("User deleted successfully"))
    }

    /// Case-insensitive name search on first name, and last name when given
    pub async fn search_users(
        &self,
        query: &UserSearchQuery,
    ) -> Result<Vec<UserResponse>, ApiError> {
        let first_name = query.first_name.trim();
        validate_search_term(first_name).map_err(ApiError::InvalidInput)?;

        let users = match query.last_name_filter() {
            Some(last_name) => {
                validate_search_term(last_name).map_err(ApiError::InvalidInput)?;
                self.users.search_by_full_name(first_name, last_name).await
            }
            None => self.users.search_by_first_name(first_name).await,
        }
        .map_err(ApiError::Internal)?;

        Ok(users.into_iter().map(to_response).collect())
    }

    pub async fn find_by_role(&self, role: UserRole) -> Result<Vec<UserResponse>, ApiError> {
        let users = self
            .users
            .find_by_role(role)
            .await
            .map_err(ApiError::Internal)?;
        Ok(users.into_iter().map(to_response).collect())
    }

    /// One page of users, newest first
    pub async fn list_users(&self, query: &PageQuery) -> Result<Vec<UserResponse>, ApiError> {
        let page = query.normalize();
        let users = self
            .users
            .list(page.size, page.offset())
            .await
            .map_err(ApiError::Internal)?;
        Ok(users.into_iter().map(to_response).collect())
    }

    /// Whether a user id is known; backs the validation endpoint
    pub async fn user_exists(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let exists = self.users.exists(user_id).await.map_err(ApiError::Internal)?;
        info!(%user_id, exists, "User validation requested");
        Ok(exists)
    }

    /// Acknowledge a logout; sessions are not tracked server-side
    pub fn logout(&self, authorization: Option<&str>) -> MessageResponse {
        let token = authorization
            .map(|h| h.strip_prefix("Bearer ").unwrap_or(h))
            .unwrap_or_default();
        let prefix: String = token.chars().take(TOKEN_LOG_PREFIX).collect();
        info!(token_prefix = %prefix, "Logout requested");
        MessageResponse::new("Logged out successfully")
    }

    async fn find(&self, user_id: Uuid) -> Result<UserRecord, ApiError> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| not_found(user_id))
    }
}

fn not_found(user_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("User not found with ID: {}", user_id))
}

fn to_response(user: UserRecord) -> UserResponse {
    UserResponse {
        user_id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        role: user.role,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

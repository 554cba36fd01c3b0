//! User account service.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use blog_auth::authenticator::Authenticated;
use blog_auth::jwt::{IssuedToken, JwtEncoder};
use blog_auth::password::{PasswordHasher, PasswordValidator};
use blog_core::error::AppError;
use blog_core::traits::ImageStorage;
use blog_database::store::UserStore;
use blog_entity::user::{CreateUser, User, UserRole};
use blog_storage::ensure_image_type;

use crate::upload::UploadedImage;
use crate::validation::{require_filled, run_rules};

/// Storage folder for profile photos.
const PHOTO_FOLDER: &str = "users";

/// Registration form fields.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterInput {
    /// Full name.
    pub name: String,
    /// Login email.
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
    /// Requested role, `user` or `admin`.
    pub role: String,
    /// Education level.
    pub education: String,
    /// Profile photo.
    pub photo: Option<UploadedImage>,
}

/// Login request fields.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Role the client claims to log in as.
    pub role: String,
}

/// A user together with a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The account.
    pub user: User,
    /// Its session token.
    pub token: IssuedToken,
}

/// Handles user registration, login, and lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    images: Arc<dyn ImageStorage>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        images: Arc<dyn ImageStorage>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            images,
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a new account and signs it in.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AppError> {
        let photo = input
            .photo
            .clone()
            .ok_or_else(|| AppError::validation("User photo is required"))?;
        ensure_image_type("photo", &photo.content_type)?;

        require_filled(&[
            &input.name,
            &input.email,
            &input.phone,
            &input.password,
            &input.role,
            &input.education,
        ])?;
        run_rules(&input)?;

        let role: UserRole = input.role.parse()?;
        self.validator.validate(&input.password)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("User already exists with this email"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let stored = self.images.upload(photo.into_upload(PHOTO_FOLDER)).await?;

        let created = self
            .users
            .create(&CreateUser {
                name: input.name.trim().to_string(),
                email: input.email.trim().to_string(),
                phone: input.phone.trim().to_string(),
                photo: stored.clone().into(),
                education: input.education.trim().to_string(),
                role,
                password_hash,
            })
            .await;

        let user = match created {
            Ok(user) => user,
            Err(e) => {
                self.discard_image(&stored.public_id).await;
                return Err(e);
            }
        };

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession { user, token })
    }

    /// Verifies credentials and the claimed role, then issues a token.
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AppError> {
        require_filled(&[&input.email, &input.password, &input.role])?;

        let invalid = || AppError::validation("Invalid email or password");

        let user = self
            .users
            .find_by_email(input.email.trim())
            .await?
            .ok_or_else(invalid)?;

        if !self
            .hasher
            .verify_password(&input.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid());
        }

        if user.role.as_str() != input.role.trim() {
            return Err(AppError::forbidden(format!(
                "Given role {} not found",
                input.role
            )));
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { user, token })
    }

    /// The authenticated caller's own account.
    pub fn profile(&self, auth: &Authenticated) -> User {
        auth.principal().clone()
    }

    /// All administrator accounts.
    pub async fn admins(&self) -> Result<Vec<User>, AppError> {
        self.users.find_by_role(UserRole::Admin).await
    }

    async fn discard_image(&self, public_id: &str) {
        if let Err(e) = self.images.delete(public_id).await {
            warn!(public_id, error = %e, "Failed to remove orphaned photo");
        }
    }
}

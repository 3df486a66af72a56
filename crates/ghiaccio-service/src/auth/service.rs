//! Registration, login, logout, and current-user flows.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use ghiaccio_auth::password::PasswordHasher;
use ghiaccio_auth::session::SessionManager;
use ghiaccio_core::error::AppError;
use ghiaccio_core::result::AppResult;
use ghiaccio_database::repositories::user::UserRepository;
use ghiaccio_entity::session::Session;
use ghiaccio_entity::user::model::CreateUser;
use ghiaccio_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Generic credential failure message. One message for unknown email and
/// wrong password so the API does not reveal which accounts exist.
const BAD_CREDENTIALS: &str = "Credenziali non valide";

/// Field-validated data for a new customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Mobile number.
    pub phone_number: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed here, never stored).
    pub password: String,
}

/// Handles registration and session-based authentication.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    /// Registers a new customer account and logs it in.
    ///
    /// Fails with a conflict when the email, the phone number, or the
    /// name+surname pair is already taken.
    pub async fn register(&self, data: NewAccount) -> AppResult<(User, Session)> {
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email già registrata"));
        }
        if self
            .users
            .find_by_name_and_surname(&data.name, &data.surname)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Nome e cognome già in uso"));
        }
        if self.users.find_by_phone(&data.phone_number).await?.is_some() {
            return Err(AppError::conflict("Numero di telefono già in uso"));
        }

        let (password_hash, salt) = self.hasher.hash_password(&data.password)?;

        let user = self
            .users
            .create(&CreateUser {
                name: data.name,
                surname: data.surname,
                phone_number: data.phone_number,
                email: data.email,
                password_hash,
                salt,
                role: UserRole::Customer,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        let session = self.sessions.create(&user, false).await?;
        Ok((user, session))
    }

    /// Authenticates a user and opens a session.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> AppResult<(User, Session)> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown email");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        };

        let valid = self
            .hasher
            .verify_password(password, &user.salt, &user.password_hash)?;
        if !valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        let session = self.sessions.create(&user, remember_me).await?;

        info!(user_id = %user.id, session_id = %session.id, "Login successful");
        Ok((user, session))
    }

    /// Destroys the given session.
    pub async fn logout(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions.destroy(session_id).await
    }

    /// Loads the full user row for an authenticated request.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

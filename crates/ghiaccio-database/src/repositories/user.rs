//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ghiaccio_core::error::{AppError, ErrorKind};
use ghiaccio_core::result::AppResult;
use ghiaccio_entity::user::model::CreateUser;
use ghiaccio_entity::user::User;

/// Repository for user CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Find a user by phone number.
    pub async fn find_by_phone(&self, phone_number: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by phone", e)
            })
    }

    /// Find a user by first and last name (case-insensitive).
    pub async fn find_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(name) = LOWER($1) AND LOWER(surname) = LOWER($2)",
        )
        .bind(name)
        .bind(surname)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by name", e))
    }

    /// Create a new user. Unique-constraint violations are mapped to
    /// conflicts with the message shown to the registering customer.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, surname, phone_number, email, password_hash, salt, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.phone_number)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.salt)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_key") =>
            {
                AppError::conflict("Email già registrata")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_phone_number_key") =>
            {
                AppError::conflict("Numero di telefono già in uso")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_name_surname_key") =>
            {
                AppError::conflict("Nome e cognome già in uso")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}

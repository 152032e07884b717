use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sf_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(&r.id, "users.id")?,
            name: r.name,
            email: r.email,
            phone: r.phone,
            password_hash: r.password_hash,
            created_at: parse_timestamp(r.created_at, "users.created_at")?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A taken email is [`DbError::Conflict`].
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, phone, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(user.email.to_lowercase())
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::Conflict { .. } => DbError::Conflict {
                message: format!("Email {} already registered", user.email),
                location: ErrorLocation::from(Location::caller()),
            },
            other => other,
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, phone, password_hash, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?
        .map(User::try_from)
        .transpose()
    }

    /// Case-insensitive lookup
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, phone, password_hash, created_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?
        .map(User::try_from)
        .transpose()
    }
}

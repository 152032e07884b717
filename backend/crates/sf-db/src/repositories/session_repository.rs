use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use sf_core::Session;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct SessionRow {
    token: String,
    user_id: String,
    created_at: i64,
    expires_at: i64,
}

impl TryFrom<SessionRow> for Session {
    type Error = DbError;

    fn try_from(r: SessionRow) -> DbErrorResult<Self> {
        Ok(Session {
            token: r.token,
            user_id: parse_uuid(&r.user_id, "sessions.user_id")?,
            created_at: parse_timestamp(r.created_at, "sessions.created_at")?,
            expires_at: parse_timestamp(r.expires_at, "sessions.expires_at")?,
        })
    }
}

pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO sessions (token, user_id, created_at, expires_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id.to_string())
        .bind(session.created_at.timestamp())
        .bind(session.expires_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Session for `token` regardless of expiry
    pub async fn find_by_token(&self, token: &str) -> DbErrorResult<Option<Session>> {
        sqlx::query_as::<_, SessionRow>(
            r#"
                SELECT token, user_id, created_at, expires_at
                FROM sessions
                WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?
        .map(Session::try_from)
        .transpose()
    }

    /// Owner of `token` if the session has not expired at `now`
    pub async fn find_live_user_id(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Uuid>> {
        let user_id: Option<String> = sqlx::query_scalar(
            r#"
                SELECT user_id
                FROM sessions
                WHERE token = ? AND expires_at > ?
            "#,
        )
        .bind(token)
        .bind(now.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        user_id
            .map(|id| parse_uuid(&id, "sessions.user_id"))
            .transpose()
    }

    /// Returns true if a session was removed
    pub async fn delete(&self, token: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Drop sessions expired at `now`; returns how many were removed
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

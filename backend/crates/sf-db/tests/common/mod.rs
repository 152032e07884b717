#![allow(dead_code)]


pub use fixtures::*;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    sf_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

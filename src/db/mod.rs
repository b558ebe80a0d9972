/// Database access layer
///
/// Provides connection pooling, schema bootstrap, and one repository module
/// per entity. Repositories are free functions over an explicitly passed
/// `&PgPool`; there is no global database handle.
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::Result;

pub mod comment_repo;
pub mod image_repo;
pub mod post_repo;
pub mod profile_repo;

/// Create the PostgreSQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Ensure the four entity tables exist.
///
/// Tables are lazily created at service startup to unblock environments
/// where migrations have not been applied yet (fresh developer machines,
/// CI spins). Foreign keys are declared without ON DELETE actions, so
/// deleting a referenced row is rejected by PostgreSQL.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    info!("Ensuring entity tables exist");

    sqlx::query(PROFILES_TABLE).execute(pool).await?;
    sqlx::query(POSTS_TABLE).execute(pool).await?;
    sqlx::query(COMMENTS_TABLE).execute(pool).await?;
    sqlx::query(IMAGES_TABLE).execute(pool).await?;

    Ok(())
}

const PROFILES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS profiles (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    name TEXT NOT NULL,
    interests TEXT,
    birthday DATE,
    start_date DATE NOT NULL
)
"#;

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id BIGSERIAL PRIMARY KEY,
    content TEXT NOT NULL,
    post_date DATE NOT NULL,
    likes INT NOT NULL DEFAULT 0,
    profile_id BIGINT NOT NULL REFERENCES profiles(id)
)
"#;

const COMMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id BIGSERIAL PRIMARY KEY,
    content TEXT NOT NULL,
    comment_date DATE NOT NULL,
    post_id BIGINT NOT NULL REFERENCES posts(id)
)
"#;

const IMAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    id BIGSERIAL PRIMARY KEY,
    url TEXT NOT NULL,
    image_date DATE NOT NULL,
    post_id BIGINT NOT NULL REFERENCES posts(id),
    comment_id BIGINT REFERENCES comments(id)
)
"#;

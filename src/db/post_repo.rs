use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Post;

/// Insert a new post
pub async fn create_post(
    pool: &PgPool,
    content: &str,
    post_date: NaiveDate,
    likes: i32,
    profile_id: i64,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (content, post_date, likes, profile_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, content, post_date, likes, profile_id
        "#,
    )
    .bind(content)
    .bind(post_date)
    .bind(likes)
    .bind(profile_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get a single post by ID
pub async fn get_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, post_date, likes, profile_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Get all posts, id order
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, content, post_date, likes, profile_id
        FROM posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Persist all post fields in one statement
pub async fn update_post(pool: &PgPool, post: &Post) -> Result<Post, sqlx::Error> {
    let updated = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET content = $1, post_date = $2, likes = $3, profile_id = $4
        WHERE id = $5
        RETURNING id, content, post_date, likes, profile_id
        "#,
    )
    .bind(&post.content)
    .bind(post.post_date)
    .bind(post.likes)
    .bind(post.profile_id)
    .bind(post.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Delete a post; returns the number of rows removed
pub async fn delete_post(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

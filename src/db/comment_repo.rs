use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Comment;

/// Insert a new comment
pub async fn create_comment(
    pool: &PgPool,
    content: &str,
    comment_date: NaiveDate,
    post_id: i64,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, comment_date, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, content, comment_date, post_id
        "#,
    )
    .bind(content)
    .bind(comment_date)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get a single comment by ID
pub async fn get_comment_by_id(pool: &PgPool, id: i64) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, comment_date, post_id
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Get all comments, id order
pub async fn list_comments(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, comment_date, post_id
        FROM comments
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Persist all comment fields in one statement
pub async fn update_comment(pool: &PgPool, comment: &Comment) -> Result<Comment, sqlx::Error> {
    let updated = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET content = $1, comment_date = $2, post_id = $3
        WHERE id = $4
        RETURNING id, content, comment_date, post_id
        "#,
    )
    .bind(&comment.content)
    .bind(comment.comment_date)
    .bind(comment.post_id)
    .bind(comment.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Delete a comment; returns the number of rows removed
pub async fn delete_comment(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

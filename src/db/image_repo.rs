use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Image;

/// Insert a new image
pub async fn create_image(
    pool: &PgPool,
    url: &str,
    image_date: NaiveDate,
    post_id: i64,
    comment_id: Option<i64>,
) -> Result<Image, sqlx::Error> {
    let image = sqlx::query_as::<_, Image>(
        r#"
        INSERT INTO images (url, image_date, post_id, comment_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, url, image_date, post_id, comment_id
        "#,
    )
    .bind(url)
    .bind(image_date)
    .bind(post_id)
    .bind(comment_id)
    .fetch_one(pool)
    .await?;

    Ok(image)
}

/// Get a single image by ID
pub async fn get_image_by_id(pool: &PgPool, id: i64) -> Result<Option<Image>, sqlx::Error> {
    let image = sqlx::query_as::<_, Image>(
        r#"
        SELECT id, url, image_date, post_id, comment_id
        FROM images
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(image)
}

/// Get all images, id order
pub async fn list_images(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
    let images = sqlx::query_as::<_, Image>(
        r#"
        SELECT id, url, image_date, post_id, comment_id
        FROM images
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(images)
}

/// Persist all image fields in one statement
pub async fn update_image(pool: &PgPool, image: &Image) -> Result<Image, sqlx::Error> {
    let updated = sqlx::query_as::<_, Image>(
        r#"
        UPDATE images
        SET url = $1, image_date = $2, post_id = $3, comment_id = $4
        WHERE id = $5
        RETURNING id, url, image_date, post_id, comment_id
        "#,
    )
    .bind(&image.url)
    .bind(image.image_date)
    .bind(image.post_id)
    .bind(image.comment_id)
    .bind(image.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Delete an image; returns the number of rows removed
pub async fn delete_image(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM images WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Image service - creation, lookup, update, and deletion of images
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::{comment_repo, image_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Image;

/// Validated input for creating an image. Every image belongs to a post;
/// attachment to a comment is optional.
pub struct NewImage {
    pub url: String,
    pub image_date: NaiveDate,
    pub post_id: i64,
    pub comment_id: Option<i64>,
}

/// Validated field changes for an image update.
///
/// `post_id` and `comment_id` are applied only when provided;
/// `Some(None)` detaches the image from its comment.
pub struct ImageChanges {
    pub url: String,
    pub image_date: NaiveDate,
    pub post_id: Option<i64>,
    pub comment_id: Option<Option<i64>>,
}

pub struct ImageService {
    pool: PgPool,
}

impl ImageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an image. The parent post (and comment, when given) must exist.
    pub async fn create_image(&self, new: NewImage) -> Result<Image> {
        self.ensure_post_exists(new.post_id).await?;
        if let Some(comment_id) = new.comment_id {
            self.ensure_comment_exists(comment_id).await?;
        }

        let image = image_repo::create_image(
            &self.pool,
            &new.url,
            new.image_date,
            new.post_id,
            new.comment_id,
        )
        .await?;

        Ok(image)
    }

    /// Get an image by ID
    pub async fn get_image(&self, id: i64) -> Result<Image> {
        image_repo::get_image_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("image {} does not exist", id)))
    }

    /// Get all images
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        Ok(image_repo::list_images(&self.pool).await?)
    }

    /// Apply validated changes and persist them in a single statement.
    pub async fn update_image(&self, id: i64, changes: ImageChanges) -> Result<Image> {
        let mut image = self.get_image(id).await?;

        if let Some(post_id) = changes.post_id {
            if post_id != image.post_id {
                self.ensure_post_exists(post_id).await?;
            }
            image.post_id = post_id;
        }
        if let Some(comment_id) = changes.comment_id {
            if let Some(comment_id) = comment_id {
                self.ensure_comment_exists(comment_id).await?;
            }
            image.comment_id = comment_id;
        }

        image.url = changes.url;
        image.image_date = changes.image_date;

        Ok(image_repo::update_image(&self.pool, &image).await?)
    }

    /// Delete an image; nothing references images, so this cannot conflict.
    pub async fn delete_image(&self, id: i64) -> Result<()> {
        let removed = image_repo::delete_image(&self.pool, id).await?;

        if removed == 0 {
            return Err(AppError::NotFound(format!("image {} does not exist", id)));
        }

        Ok(())
    }

    async fn ensure_post_exists(&self, post_id: i64) -> Result<()> {
        if post_repo::get_post_by_id(&self.pool, post_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "post_id {} does not reference an existing post",
                post_id
            )));
        }
        Ok(())
    }

    async fn ensure_comment_exists(&self, comment_id: i64) -> Result<()> {
        if comment_repo::get_comment_by_id(&self.pool, comment_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "comment_id {} does not reference an existing comment",
                comment_id
            )));
        }
        Ok(())
    }
}

/// Post service - creation, lookup, update, and deletion of posts
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::{post_repo, profile_repo};
use crate::error::{AppError, Result};
use crate::models::Post;

/// Validated input for creating a post
pub struct NewPost {
    pub content: String,
    pub post_date: NaiveDate,
    pub likes: i32,
    pub profile_id: i64,
}

/// Validated field changes for a post update
pub struct PostChanges {
    pub content: String,
    pub post_date: NaiveDate,
    pub likes: i32,
    pub profile_id: i64,
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post. The owning profile must exist.
    pub async fn create_post(&self, new: NewPost) -> Result<Post> {
        self.ensure_profile_exists(new.profile_id).await?;

        let post = post_repo::create_post(
            &self.pool,
            &new.content,
            new.post_date,
            new.likes,
            new.profile_id,
        )
        .await?;

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, id: i64) -> Result<Post> {
        post_repo::get_post_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", id)))
    }

    /// Get all posts
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(post_repo::list_posts(&self.pool).await?)
    }

    /// Apply validated changes and persist them in a single statement.
    pub async fn update_post(&self, id: i64, changes: PostChanges) -> Result<Post> {
        let mut post = self.get_post(id).await?;

        if changes.profile_id != post.profile_id {
            self.ensure_profile_exists(changes.profile_id).await?;
        }

        post.content = changes.content;
        post.post_date = changes.post_date;
        post.likes = changes.likes;
        post.profile_id = changes.profile_id;

        Ok(post_repo::update_post(&self.pool, &post).await?)
    }

    /// Delete a post.
    ///
    /// Posts with dependent comments or images are protected by the schema's
    /// foreign keys; the delete is rejected as a conflict instead of leaving
    /// orphaned children behind.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        let removed = post_repo::delete_post(&self.pool, id)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict(format!(
                    "post {} still has comments or images and cannot be deleted",
                    id
                )),
                other => other,
            })?;

        if removed == 0 {
            return Err(AppError::NotFound(format!("post {} does not exist", id)));
        }

        Ok(())
    }

    async fn ensure_profile_exists(&self, profile_id: i64) -> Result<()> {
        if profile_repo::get_profile_by_id(&self.pool, profile_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "profile_id {} does not reference an existing profile",
                profile_id
            )));
        }
        Ok(())
    }
}

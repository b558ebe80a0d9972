/// Comment service - creation, lookup, update, and deletion of comments
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;

/// Validated input for creating a comment
pub struct NewComment {
    pub content: String,
    pub comment_date: NaiveDate,
    pub post_id: i64,
}

/// Validated field changes for a comment update
pub struct CommentChanges {
    pub content: String,
    pub comment_date: NaiveDate,
    pub post_id: i64,
}

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment. The parent post must exist.
    pub async fn create_comment(&self, new: NewComment) -> Result<Comment> {
        self.ensure_post_exists(new.post_id).await?;

        let comment =
            comment_repo::create_comment(&self.pool, &new.content, new.comment_date, new.post_id)
                .await?;

        Ok(comment)
    }

    /// Get a comment by ID
    pub async fn get_comment(&self, id: i64) -> Result<Comment> {
        comment_repo::get_comment_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {} does not exist", id)))
    }

    /// Get all comments
    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(comment_repo::list_comments(&self.pool).await?)
    }

    /// Apply validated changes and persist them in a single statement.
    pub async fn update_comment(&self, id: i64, changes: CommentChanges) -> Result<Comment> {
        let mut comment = self.get_comment(id).await?;

        if changes.post_id != comment.post_id {
            self.ensure_post_exists(changes.post_id).await?;
        }

        comment.content = changes.content;
        comment.comment_date = changes.comment_date;
        comment.post_id = changes.post_id;

        Ok(comment_repo::update_comment(&self.pool, &comment).await?)
    }

    /// Delete a comment.
    ///
    /// Comments with attached images are protected by the schema's foreign
    /// keys; the delete is rejected as a conflict.
    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        let removed = comment_repo::delete_comment(&self.pool, id)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict(format!(
                    "comment {} still has images and cannot be deleted",
                    id
                )),
                other => other,
            })?;

        if removed == 0 {
            return Err(AppError::NotFound(format!("comment {} does not exist", id)));
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
}

/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::services::{CommentChanges, CommentService, NewComment};
use crate::validators::{parse_date, require_non_empty};

/// Request body for creating a comment
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub comment_date: Option<String>,
    pub post_id: Option<i64>,
}

/// Request body for updating a comment; all fields are required
#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
    pub comment_date: Option<String>,
    pub post_id: Option<i64>,
}

fn validate_create(req: CreateCommentRequest) -> Result<NewComment> {
    let content = require_non_empty("content", req.content.as_deref())?;
    let comment_date_raw = require_non_empty("comment_date", req.comment_date.as_deref())?;
    let post_id = req
        .post_id
        .ok_or_else(|| AppError::Validation("post_id is required".to_string()))?;

    let comment_date = parse_date("comment_date", &comment_date_raw)?;

    Ok(NewComment {
        content,
        comment_date,
        post_id,
    })
}

fn validate_update(req: UpdateCommentRequest) -> Result<CommentChanges> {
    let content = require_non_empty("content", req.content.as_deref())?;
    let comment_date_raw = require_non_empty("comment_date", req.comment_date.as_deref())?;
    let post_id = req
        .post_id
        .ok_or_else(|| AppError::Validation("post_id is required".to_string()))?;

    let comment_date = parse_date("comment_date", &comment_date_raw)?;

    Ok(CommentChanges {
        content,
        comment_date,
        post_id,
    })
}

/// Create a new comment
pub async fn create_comment(
    pool: web::Data<PgPool>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let new = validate_create(req.into_inner())?;
    let service = CommentService::new((**pool).clone());
    let comment = service.create_comment(new).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Get all comments
pub async fn list_comments(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.list_comments().await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Get a single comment
pub async fn get_comment(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.get_comment(*id).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Update a comment
pub async fn update_comment(
    pool: web::Data<PgPool>,
    id: web::Path<i64>,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let changes = validate_update(req.into_inner())?;
    let service = CommentService::new((**pool).clone());
    let comment = service.update_comment(*id, changes).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment
pub async fn delete_comment(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    service.delete_comment(*id).await?;

    Ok(HttpResponse::Ok().json(true))
}

/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::services::{NewPost, PostChanges, PostService};
use crate::validators::{parse_date, require_non_empty};

/// Request body for creating a post
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub post_date: Option<String>,
    pub profile_id: Option<i64>,
    pub likes: Option<i32>,
}

/// Request body for updating a post; all fields are required
#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub post_date: Option<String>,
    pub likes: Option<i32>,
    pub profile_id: Option<i64>,
}

fn validate_create(req: CreatePostRequest) -> Result<NewPost> {
    let content = require_non_empty("content", req.content.as_deref())?;
    let post_date_raw = require_non_empty("post_date", req.post_date.as_deref())?;
    let profile_id = req
        .profile_id
        .ok_or_else(|| AppError::Validation("profile_id is required".to_string()))?;

    let post_date = parse_date("post_date", &post_date_raw)?;

    Ok(NewPost {
        content,
        post_date,
        likes: req.likes.unwrap_or(0),
        profile_id,
    })
}

fn validate_update(req: UpdatePostRequest) -> Result<PostChanges> {
    let content = require_non_empty("content", req.content.as_deref())?;
    let post_date_raw = require_non_empty("post_date", req.post_date.as_deref())?;
    let likes = req
        .likes
        .ok_or_else(|| AppError::Validation("likes is required".to_string()))?;
    let profile_id = req
        .profile_id
        .ok_or_else(|| AppError::Validation("profile_id is required".to_string()))?;

    let post_date = parse_date("post_date", &post_date_raw)?;

    Ok(PostChanges {
        content,
        post_date,
        likes,
        profile_id,
    })
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let new = validate_create(req.into_inner())?;
    let service = PostService::new((**pool).clone());
    let post = service.create_post(new).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Get all posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a single post
pub async fn get_post(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(*id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Update a post
pub async fn update_post(
    pool: web::Data<PgPool>,
    id: web::Path<i64>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let changes = validate_update(req.into_inner())?;
    let service = PostService::new((**pool).clone());
    let post = service.update_post(*id, changes).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post
pub async fn delete_post(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(*id).await?;

    Ok(HttpResponse::Ok().json(true))
}

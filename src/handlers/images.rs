/// Image handlers - HTTP endpoints for image operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::services::{ImageChanges, ImageService, NewImage};
use crate::validators::{parse_date, require_non_empty};

use super::double_option;

/// Request body for creating an image; `comment_id` is optional
#[derive(Deserialize)]
pub struct CreateImageRequest {
    pub url: Option<String>,
    pub image_date: Option<String>,
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
}

/// Request body for updating an image.
///
/// `url` and `image_date` are required; `post_id` and `comment_id` are
/// applied only when provided, and an explicit null detaches the image
/// from its comment.
#[derive(Deserialize)]
pub struct UpdateImageRequest {
    pub url: Option<String>,
    pub image_date: Option<String>,
    pub post_id: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub comment_id: Option<Option<i64>>,
}

fn validate_create(req: CreateImageRequest) -> Result<NewImage> {
    let url = require_non_empty("url", req.url.as_deref())?;
    let image_date_raw = require_non_empty("image_date", req.image_date.as_deref())?;
    let post_id = req
        .post_id
        .ok_or_else(|| AppError::Validation("post_id is required".to_string()))?;

    let image_date = parse_date("image_date", &image_date_raw)?;

    Ok(NewImage {
        url,
        image_date,
        post_id,
        comment_id: req.comment_id,
    })
}

fn validate_update(req: UpdateImageRequest) -> Result<ImageChanges> {
    let url = require_non_empty("url", req.url.as_deref())?;
    let image_date_raw = require_non_empty("image_date", req.image_date.as_deref())?;

    let image_date = parse_date("image_date", &image_date_raw)?;

    Ok(ImageChanges {
        url,
        image_date,
        post_id: req.post_id,
        comment_id: req.comment_id,
    })
}

/// Create a new image
pub async fn create_image(
    pool: web::Data<PgPool>,
    req: web::Json<CreateImageRequest>,
) -> Result<HttpResponse> {
    let new = validate_create(req.into_inner())?;
    let service = ImageService::new((**pool).clone());
    let image = service.create_image(new).await?;

    Ok(HttpResponse::Ok().json(image))
}

/// Get all images
pub async fn list_images(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = ImageService::new((**pool).clone());
    let images = service.list_images().await?;

    Ok(HttpResponse::Ok().json(images))
}

/// Get a single image
pub async fn get_image(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = ImageService::new((**pool).clone());
    let image = service.get_image(*id).await?;

    Ok(HttpResponse::Ok().json(image))
}

/// Update an image
pub async fn update_image(
    pool: web::Data<PgPool>,
    id: web::Path<i64>,
    req: web::Json<UpdateImageRequest>,
) -> Result<HttpResponse> {
    let changes = validate_update(req.into_inner())?;
    let service = ImageService::new((**pool).clone());
    let image = service.update_image(*id, changes).await?;

    Ok(HttpResponse::Ok().json(image))
}

/// Delete an image
pub async fn delete_image(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = ImageService::new((**pool).clone());
    service.delete_image(*id).await?;

    Ok(HttpResponse::Ok().json(true))
}

/// Profile handlers - HTTP endpoints for profile operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::ProfileResponse;
use crate::services::{NewProfile, ProfileChanges, ProfileService};
use crate::validators::{
    parse_date, parse_optional_date, require_non_empty, validate_password, validate_username,
};

use super::double_option;

/// Request body for creating a profile
#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub interests: Option<String>,
    pub birthday: Option<String>,
}

/// Request body for updating a profile.
///
/// All four required fields must be present; `interests` and `birthday`
/// distinguish absent (leave unchanged) from null (clear).
#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub interests: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub birthday: Option<Option<String>>,
}

fn validate_create(req: CreateProfileRequest) -> Result<NewProfile> {
    let username = require_non_empty("username", req.username.as_deref())?;
    let password = require_non_empty("password", req.password.as_deref())?;
    let name = require_non_empty("name", req.name.as_deref())?;
    let start_date_raw = require_non_empty("start_date", req.start_date.as_deref())?;

    let start_date = parse_date("start_date", &start_date_raw)?;
    let birthday = parse_optional_date("birthday", req.birthday.as_deref())?;

    Ok(NewProfile {
        username,
        password,
        name,
        interests: req.interests,
        birthday,
        start_date,
    })
}

fn validate_update(req: UpdateProfileRequest) -> Result<ProfileChanges> {
    let username = require_non_empty("username", req.username.as_deref())?;
    let password = require_non_empty("password", req.password.as_deref())?;
    let name = require_non_empty("name", req.name.as_deref())?;
    let start_date_raw = require_non_empty("start_date", req.start_date.as_deref())?;

    if !validate_username(&username) {
        return Err(AppError::Validation(
            "username must be at least 3 characters".to_string(),
        ));
    }
    if !validate_password(&password) {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    let start_date = parse_date("start_date", &start_date_raw)?;

    let birthday = match req.birthday {
        None => None,
        Some(raw) => Some(parse_optional_date("birthday", raw.as_deref())?),
    };

    Ok(ProfileChanges {
        username,
        password,
        name,
        start_date,
        interests: req.interests,
        birthday,
    })
}

/// Create a new profile
pub async fn create_profile(
    pool: web::Data<PgPool>,
    req: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse> {
    let new = validate_create(req.into_inner())?;
    let service = ProfileService::new((**pool).clone());
    let profile = service.create_profile(new).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// Get all profiles
pub async fn list_profiles(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = ProfileService::new((**pool).clone());
    let profiles = service.list_profiles().await?;
    let body: Vec<ProfileResponse> = profiles.into_iter().map(ProfileResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// Get a single profile
pub async fn get_profile(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = ProfileService::new((**pool).clone());
    let profile = service.get_profile(*id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// Update a profile
pub async fn update_profile(
    pool: web::Data<PgPool>,
    id: web::Path<i64>,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let changes = validate_update(req.into_inner())?;
    let service = ProfileService::new((**pool).clone());
    let profile = service.update_profile(*id, changes).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// Delete a profile
pub async fn delete_profile(pool: web::Data<PgPool>, id: web::Path<i64>) -> Result<HttpResponse> {
    let service = ProfileService::new((**pool).clone());
    service.delete_profile(*id).await?;

    Ok(HttpResponse::Ok().json(true))
}

/// Profile service - creation, lookup, update, and deletion of profiles
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::profile_repo;
use crate::error::{AppError, Result};
use crate::models::Profile;
use crate::security::password::scramble;

/// Validated input for creating a profile. The password is still plaintext
/// here; the service scrambles it before it touches storage.
pub struct NewProfile {
    pub username: String,
    pub password: String,
    pub name: String,
    pub interests: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub start_date: NaiveDate,
}

/// Validated field changes for a profile update.
///
/// The required fields are always present (the handler rejects payloads
/// missing any of them). `interests` and `birthday` are applied only when
/// provided; `Some(None)` clears the stored value.
pub struct ProfileChanges {
    pub username: String,
    pub password: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub interests: Option<Option<String>>,
    pub birthday: Option<Option<NaiveDate>>,
}

pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a profile; the stored password is the scrambled form.
    pub async fn create_profile(&self, new: NewProfile) -> Result<Profile> {
        let scrambled = scramble(&new.password);

        let profile = profile_repo::create_profile(
            &self.pool,
            &new.username,
            &scrambled,
            &new.name,
            new.interests.as_deref(),
            new.birthday,
            new.start_date,
        )
        .await?;

        Ok(profile)
    }

    /// Get a profile by ID
    pub async fn get_profile(&self, id: i64) -> Result<Profile> {
        profile_repo::get_profile_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("profile {} does not exist", id)))
    }

    /// Get all profiles
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(profile_repo::list_profiles(&self.pool).await?)
    }

    /// Apply validated changes and persist them in a single statement.
    pub async fn update_profile(&self, id: i64, changes: ProfileChanges) -> Result<Profile> {
        let mut profile = self.get_profile(id).await?;

        profile.username = changes.username;
        profile.password = scramble(&changes.password);
        profile.name = changes.name;
        profile.start_date = changes.start_date;
        if let Some(interests) = changes.interests {
            profile.interests = interests;
        }
        if let Some(birthday) = changes.birthday {
            profile.birthday = birthday;
        }

        Ok(profile_repo::update_profile(&self.pool, &profile).await?)
    }

    /// Delete a profile.
    ///
    /// Deleting a profile that still owns posts is rejected by the schema's
    /// foreign keys and surfaces as a conflict.
    pub async fn delete_profile(&self, id: i64) -> Result<()> {
        let removed = profile_repo::delete_profile(&self.pool, id)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict(format!(
                    "profile {} still owns posts and cannot be deleted",
                    id
                )),
                other => other,
            })?;

        if removed == 0 {
            return Err(AppError::NotFound(format!("profile {} does not exist", id)));
        }

        Ok(())
    }
}

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::Profile;

/// Insert a new profile
pub async fn create_profile(
    pool: &PgPool,
    username: &str,
    password: &str,
    name: &str,
    interests: Option<&str>,
    birthday: Option<NaiveDate>,
    start_date: NaiveDate,
) -> Result<Profile, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (username, password, name, interests, birthday, start_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, username, password, name, interests, birthday, start_date
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(name)
    .bind(interests)
    .bind(birthday)
    .bind(start_date)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

/// Get a single profile by ID
pub async fn get_profile_by_id(pool: &PgPool, id: i64) -> Result<Option<Profile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, username, password, name, interests, birthday, start_date
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Get all profiles, id order
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    let profiles = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, username, password, name, interests, birthday, start_date
        FROM profiles
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(profiles)
}

/// Persist all profile fields in one statement
pub async fn update_profile(pool: &PgPool, profile: &Profile) -> Result<Profile, sqlx::Error> {
    let updated = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET username = $1, password = $2, name = $3, interests = $4, birthday = $5, start_date = $6
        WHERE id = $7
        RETURNING id, username, password, name, interests, birthday, start_date
        "#,
    )
    .bind(&profile.username)
    .bind(&profile.password)
    .bind(&profile.name)
    .bind(&profile.interests)
    .bind(profile.birthday)
    .bind(profile.start_date)
    .bind(profile.id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Delete a profile; returns the number of rows removed
pub async fn delete_profile(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

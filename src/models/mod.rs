/// Data models for the social API
///
/// Four entities with a one-to-many relational chain:
/// profile -> posts, post -> comments, post -> images, comment -> images.
///
/// Each entity has a corresponding `*Response` type which is the wire shape.
/// The stored password is never serialized; responses carry a fixed
/// placeholder instead.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Placeholder returned in place of the scrambled password.
pub const PASSWORD_PLACEHOLDER: &str = "Not shown for security reasons.";

/// A user profile row
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    /// Scrambled form (`salt_hex:digest_hex`), never the plaintext
    pub password: String,
    pub name: String,
    pub interests: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub start_date: NaiveDate,
}

/// Wire representation of a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub interests: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub start_date: NaiveDate,
    pub password: String,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        ProfileResponse {
            id: p.id,
            username: p.username,
            name: p.name,
            interests: p.interests,
            birthday: p.birthday,
            start_date: p.start_date,
            password: PASSWORD_PLACEHOLDER.to_string(),
        }
    }
}

/// A post row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub post_date: NaiveDate,
    pub likes: i32,
    pub profile_id: i64,
}

/// A comment row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub comment_date: NaiveDate,
    pub post_id: i64,
}

/// An image row; belongs to a post and optionally to a comment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i64,
    pub url: String,
    pub image_date: NaiveDate,
    pub post_id: i64,
    pub comment_id: Option<i64>,
}

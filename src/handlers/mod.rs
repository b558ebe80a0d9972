/// HTTP handlers for the four resource collections
///
/// Each module owns its request structs and the validation that turns a raw
/// payload into typed service input. Optional fields distinguish "absent"
/// from "null" where the update contract needs it.
pub mod comments;
pub mod images;
pub mod posts;
pub mod profiles;

// Re-export handler functions at module level
pub use comments::{create_comment, delete_comment, get_comment, list_comments, update_comment};
pub use images::{create_image, delete_image, get_image, list_images, update_image};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
pub use profiles::{create_profile, delete_profile, get_profile, list_profiles, update_profile};

use serde::{Deserialize, Deserializer};

/// Deserialize helper distinguishing an absent key from an explicit null.
///
/// Pair with `#[serde(default)]`: absent => `None`,
/// `null` => `Some(None)`, value => `Some(Some(v))`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

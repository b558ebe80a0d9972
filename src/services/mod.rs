/// Business logic layer
///
/// One service per entity. Services own the rules the storage layer cannot
/// express (parent-existence checks, password scrambling) and translate
/// repository results into application errors. Each service borrows the
/// explicitly passed connection pool; there is no shared session state.
pub mod comments;
pub mod images;
pub mod posts;
pub mod profiles;

pub use comments::{CommentChanges, CommentService, NewComment};
pub use images::{ImageChanges, ImageService, NewImage};
pub use posts::{NewPost, PostChanges, PostService};
pub use profiles::{NewProfile, ProfileChanges, ProfileService};

/// Security utilities
pub mod password;

pub use password::{scramble, verify};

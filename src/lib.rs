/// Social API Library
///
/// A small data-management backend for a social-network-style application.
/// Stores profiles, posts, comments, and images in PostgreSQL and exposes
/// CRUD endpoints over HTTP/JSON.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers, one module per resource
/// - `services`: Business logic layer over the repositories
/// - `db`: Connection pool, schema bootstrap, and repositories
/// - `models`: Entity structs and serialized response types
/// - `security`: Password scrambling
/// - `validators`: Field validation helpers
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};

//! StudyAI API - REST backend for notes, flashcards, and quizzes
//!
//! This crate exposes a small Axum REST surface over PostgreSQL: a client
//! stores free-text study notes and derives flashcards and quiz questions
//! from them via naive sentence splitting. All durable state lives in the
//! database; every request is handled statelessly.

pub mod config;
pub mod db;
pub mod error;
pub mod generate;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbClient, DbConfig};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode};
pub use routes::create_api_router;
pub use types::*;

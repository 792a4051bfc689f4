//! Typed HTTP client for the StudyAI backend.
//!
//! Wraps every REST endpoint with an async method sharing the server's
//! request/response types:
//!
//! ```no_run
//! use studyai_client::{ClientConfig, StudyClient};
//!
//! # async fn demo() -> Result<(), studyai_client::ApiClientError> {
//! let client = StudyClient::new(&ClientConfig::default())?;
//! client.save_notes("The mitochondria is the powerhouse of the cell.", None).await?;
//! let cards = client.generate_flashcards("...", Some("easy"), None).await?;
//! println!("{}", cards.message);
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod config;

pub use api_client::{ApiClientError, StudyClient};
pub use config::ClientConfig;

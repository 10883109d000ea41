//! Objects API client library.
//!
//! A Rust library for the public objects REST API at
//! `https://api.restful-api.dev/objects`, plus a walkthrough that exercises
//! it end to end: list, create, read back, update, delete.
//!
//! # Quick Start
//!
//! ```no_run
//! use objectsapi::{Create, Get, ObjectRecord, ObjectRequest, ObjectsClient};
//!
//! #[tokio::main]
//! async fn main() -> objectsapi::Result<()> {
//!     // One client per run, passed to every operation
//!     let client = ObjectsClient::from_env()?;
//!
//!     let request = ObjectRequest::new("Apple MacBook Pro 16")
//!         .with_attr("year", 2019_i64)
//!         .with_attr("price", 1849.99);
//!     let created = ObjectRecord::create(&client, &request).await?;
//!
//!     let fetched = ObjectRecord::get(&client, created.id.clone()).await?;
//!     println!("{} is {}", fetched.id, fetched.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Each API operation is a trait implemented by [`ObjectRecord`]:
//!
//! - [`List`] - Fetch the collection
//! - [`Create`] - Add an object
//! - [`Get`] - Fetch one object by id
//! - [`Update`] - Replace an object
//! - [`Delete`] - Remove an object
//!
//! [`Walkthrough`] chains them, printing each response.
//!
//! # Configuration
//!
//! - `OBJECTS_API_URL` (optional) - API root (defaults to
//!   `https://api.restful-api.dev`)

pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
mod output;
mod traits;
mod walkthrough;

// Re-export core types
pub use client::{ObjectsClient, COLLECTION_PATH, DEFAULT_API_URL};
pub use error::{ObjectsError, Result};

// Re-export traits
pub use output::{format_timestamp, PrettyPrint};
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{
    parse_attribute, AttributeValue, Attributes, ObjectListQuery, ObjectRecord, ObjectRequest,
};

// Re-export the walkthrough
pub use walkthrough::{create_payload, update_payload, Outcome, Step, Walkthrough, PAYLOAD_NAME};

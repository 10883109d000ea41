//! HTTP request handlers for the mock server.

pub mod objects;

pub use objects::*;

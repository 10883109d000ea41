//! Trait definitions for objects API operations.
//!
//! Each operation the API exposes is its own trait, implemented by the
//! entity types that support it.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use update::Update;

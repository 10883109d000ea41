//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::ObjectsClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use objectsapi::{ObjectsClient, ObjectRecord, Get};
///
/// let client = ObjectsClient::from_env()?;
/// let object = ObjectRecord::get(&client, "7".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &ObjectsClient, id: Self::Id) -> Result<Self>;
}

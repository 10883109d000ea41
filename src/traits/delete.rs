//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::ObjectsClient;
use crate::error::Result;

/// Delete an entity.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity, returning the server's confirmation body as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &ObjectsClient, id: Self::Id) -> Result<String>;
}

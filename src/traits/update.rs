//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::ObjectsClient;
use crate::error::Result;

/// Replace an existing entity.
///
/// # Example
///
/// ```ignore
/// use objectsapi::{ObjectsClient, ObjectRecord, ObjectRequest, Update};
///
/// let client = ObjectsClient::from_env()?;
/// let request = ObjectRequest::new("Apple MacBook Pro 16").with_attr("color", "silver");
/// let updated = ObjectRecord::update(&client, "7".to_string(), &request).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params: Sync;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &ObjectsClient, id: Self::Id, params: &Self::Params) -> Result<Self>;
}

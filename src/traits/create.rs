//! Create trait for adding entities.

use async_trait::async_trait;

use crate::client::ObjectsClient;
use crate::error::Result;

/// Create a new entity.
///
/// The server assigns the identifier; it is available on the returned value.
///
/// # Example
///
/// ```ignore
/// use objectsapi::{ObjectsClient, ObjectRecord, ObjectRequest, Create};
///
/// let client = ObjectsClient::from_env()?;
/// let request = ObjectRequest::new("Apple MacBook Pro 16").with_attr("year", 2019_i64);
/// let created = ObjectRecord::create(&client, &request).await?;
/// println!("created {}", created.id);
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Body of the create request.
    type Params: Sync;

    /// Create the entity and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    async fn create(client: &ObjectsClient, params: &Self::Params) -> Result<Self>;
}

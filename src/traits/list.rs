//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::ObjectsClient;
use crate::error::Result;

/// List entities, optionally filtered.
///
/// The objects API returns the whole collection in one response, so there
/// is no paging.
///
/// # Example
///
/// ```ignore
/// use objectsapi::{ObjectsClient, ObjectRecord, List};
///
/// let client = ObjectsClient::from_env()?;
/// let all = ObjectRecord::list(&client, &Default::default()).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Default + Send + Sync;

    /// List entities matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    async fn list(client: &ObjectsClient, query: &Self::Query) -> Result<Vec<Self>>;
}

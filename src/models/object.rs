//! Object model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::client::{item_path, ObjectsClient, COLLECTION_PATH};
use crate::error::{ObjectsError, Result};
use crate::models::attribute::{AttributeValue, Attributes};
use crate::traits::{Create, Delete, Get, List, Update};

/// An object stored by the API.
///
/// The `id` is assigned by the server on create and never changes.
/// Timestamps are only present on the responses that set them:
/// `createdAt` on create, `updatedAt` on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Attributes; `null` for objects stored without any.
    #[serde(default)]
    pub data: Option<Attributes>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Decode an ISO-8601 timestamp, reading one without an offset as UTC.
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

impl ObjectRecord {
    /// Number of attributes (zero when `data` is null).
    pub fn attribute_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Look up one attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.data.as_ref().and_then(|d| d.get(key))
    }
}

/// Body of a create (POST) or update (PUT) request.
///
/// Serialized as `{"name": ..., "data": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRequest {
    pub name: String,
    #[serde(default)]
    pub data: Attributes,
}

impl ObjectRequest {
    /// Start a request with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Attributes::new(),
        }
    }

    /// Add (or replace) one attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Query parameters for listing objects.
///
/// The API accepts the `id` parameter repeatedly (`?id=3&id=5`) to restrict
/// the listing to those objects. No ids means the whole collection.
#[derive(Debug, Clone, Default)]
pub struct ObjectListQuery {
    pub ids: Vec<String>,
}

impl ObjectListQuery {
    /// Restrict the listing to the given ids.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    fn params(&self) -> Vec<(&'static str, &str)> {
        self.ids.iter().map(|id| ("id", id.as_str())).collect()
    }
}

/// Read the whole body, then decode it.
///
/// Decoding from text keeps malformed bodies distinct from transport errors.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await.map_err(ObjectsError::HttpError)?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl List for ObjectRecord {
    type Query = ObjectListQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &ObjectsClient, query: &Self::Query) -> Result<Vec<Self>> {
        let response = if query.ids.is_empty() {
            client.get(COLLECTION_PATH).await?
        } else {
            client.get_with_query(COLLECTION_PATH, &query.params()).await?
        };
        decode(response).await
    }
}

#[async_trait]
impl Get for ObjectRecord {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn get(client: &ObjectsClient, id: String) -> Result<Self> {
        let response = client.get(&item_path(&id)?).await?;
        decode(response).await
    }
}

#[async_trait]
impl Create for ObjectRecord {
    type Params = ObjectRequest;

    #[tracing::instrument(skip(client))]
    async fn create(client: &ObjectsClient, params: &Self::Params) -> Result<Self> {
        let response = client.post(COLLECTION_PATH, params).await?;
        decode(response).await
    }
}

#[async_trait]
impl Update for ObjectRecord {
    type Id = String;
    type Params = ObjectRequest;

    #[tracing::instrument(skip(client))]
    async fn update(client: &ObjectsClient, id: String, params: &Self::Params) -> Result<Self> {
        let response = client.put(&item_path(&id)?, params).await?;
        decode(response).await
    }
}

#[async_trait]
impl Delete for ObjectRecord {
    type Id = String;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &ObjectsClient, id: String) -> Result<String> {
        let response = client.delete(&item_path(&id)?).await?;
        response.text().await.map_err(ObjectsError::HttpError)
    }
}

//! Objects API client.
//!
//! Low-level HTTP client that handles raw requests against the API root.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{ObjectsError, Result};

/// Default API root. The objects collection lives at `{root}/objects`.
pub const DEFAULT_API_URL: &str = "https://api.restful-api.dev";

/// Path of the objects collection, relative to the API root.
pub const COLLECTION_PATH: &str = "objects";

const USER_AGENT: &str = concat!("objectsapi/", env!("CARGO_PKG_VERSION"));

/// Low-level objects API client.
///
/// Sends HTTP requests and converts non-success statuses into errors.
/// Entity-specific operations are implemented via the `List`, `Get`,
/// `Create`, `Update` and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. Construct one per run and pass it by reference.
///
/// # Example
///
/// ```no_run
/// use objectsapi::ObjectsClient;
///
/// # fn example() -> objectsapi::Result<()> {
/// // Create from environment variables
/// let client = ObjectsClient::from_env()?;
///
/// // Or point it at another host
/// let client = ObjectsClient::new("http://127.0.0.1:8080")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ObjectsClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for ObjectsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectsClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ObjectsClient {
    /// Create a client from environment variables.
    ///
    /// Uses `OBJECTS_API_URL` for the API root (defaults to
    /// `https://api.restful-api.dev`).
    ///
    /// # Errors
    ///
    /// Returns an error if `OBJECTS_API_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("OBJECTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client for the given API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or invalid.
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(ObjectsError::ConfigMissing("base URL is empty".to_string()));
        }

        // Ensure base URL ends with / so relative joins keep its path
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(ObjectsError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ObjectsError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ObjectsError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(ObjectsError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "PUT");

        let response = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(ObjectsError::HttpError)?;

        Self::check_response(response).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "DELETE");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ObjectsError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(ObjectsError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // The API reports failures as {"error": "..."}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

/// Relative path of a single object, with the id percent-encoded.
///
/// URL parsing resolves `.` and `..` segments (encoded or not), and an
/// empty id names the collection, so those ids are rejected.
pub(crate) fn item_path(id: &str) -> Result<String> {
    if matches!(id, "" | "." | "..") {
        return Err(ObjectsError::InvalidId(id.to_string()));
    }
    Ok(format!("{}/{}", COLLECTION_PATH, urlencoding::encode(id)))
}

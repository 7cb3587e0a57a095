//! Upath AIGC API client.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::scene::SceneService;
use crate::voice::VoiceChatService;

/// Default AIGC API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.upath.cn";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "UPATH_API_BASE_URL";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upath AIGC API client.
///
/// The client is a stateless request builder: the API key is passed into
/// each operation rather than held by the client, so one client serves any
/// number of keys.
///
/// # Example
///
/// ```rust,no_run
/// use upath_aigc::Client;
///
/// # async fn run() -> upath_aigc::Result<()> {
/// let client = Client::new()?;
/// let scenes = client.scene().get_scenes(Some("your-api-key"), None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a client with the default configuration.
    ///
    /// The base URL comes from the `UPATH_API_BASE_URL` environment variable
    /// when set, otherwise [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the scene configuration service.
    pub fn scene(&self) -> SceneService {
        SceneService::new(self.http.clone())
    }

    /// Returns the voice chat session service.
    pub fn voice_chat(&self) -> VoiceChatService {
        VoiceChatService::new(self.http.clone())
    }
}

/// Builder for creating an AIGC API client.
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom base URL, taking precedence over the environment.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        if base_url.is_empty() {
            return Err(Error::Config("base_url must be non-empty".to_string()));
        }

        Ok(Client {
            http: Arc::new(HttpClient::new(base_url, self.timeout)?),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Scene configuration service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::HttpClient;

const GET_SCENES_PATH: &str = "/api/aigc/getScenes";

/// Scene configuration service.
pub struct SceneService {
    http: Arc<HttpClient>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct GetScenesRequest {
    #[serde(rename = "scene_name", skip_serializing_if = "Option::is_none")]
    scene_name: Option<String>,
}

/// Outcome of an API key check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValidation {
    /// Whether the backend accepted the key.
    pub valid: bool,
    /// Failure message when the key was rejected.
    pub message: Option<String>,
}

impl SceneService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches scene and RTC configuration.
    ///
    /// With no `scene_name` the backend picks its own default scene. The
    /// payload is returned exactly as parsed; this client does not interpret
    /// it.
    pub async fn get_scenes(
        &self,
        api_key: Option<&str>,
        scene_name: Option<&str>,
    ) -> Result<Value> {
        let body = GetScenesRequest {
            scene_name: scene_name.filter(|s| !s.is_empty()).map(str::to_owned),
        };
        self.http.post(GET_SCENES_PATH, None, api_key, &body).await
    }

    /// Checks whether an API key is accepted by the backend.
    ///
    /// There is no dedicated auth endpoint; this probes `get_scenes` with no
    /// scene name and treats any success as proof that the key works. The
    /// flip side is that a scene-related failure unrelated to the key is
    /// reported as an invalid key. Never returns an error itself.
    pub async fn validate_api_key(&self, api_key: Option<&str>) -> KeyValidation {
        match self.get_scenes(api_key, None).await {
            Ok(_) => KeyValidation {
                valid: true,
                message: None,
            },
            Err(err) => KeyValidation {
                valid: false,
                message: Some(err.message()),
            },
        }
    }
}

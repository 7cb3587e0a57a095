//! Voice chat session control.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::HttpClient;

const PROXY_PATH: &str = "/api/aigc/proxy";
const ACTION_START: &str = "StartVoiceChat";
const ACTION_STOP: &str = "StopVoiceChat";

/// Voice chat session service.
///
/// Start and stop are plain request/response pairs; the session lifecycle
/// between them is owned entirely by the backend. No state is tracked here,
/// so the caller is responsible for knowing whether a session is active.
pub struct VoiceChatService {
    http: Arc<HttpClient>,
}

#[derive(Debug, Clone, Serialize)]
struct VoiceChatRequest {
    #[serde(rename = "SceneID")]
    scene_id: String,
}

impl VoiceChatService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Starts a voice chat session for the given scene.
    pub async fn start(&self, api_key: Option<&str>, scene_id: &str) -> Result<Value> {
        self.request(ACTION_START, api_key, scene_id).await
    }

    /// Stops a voice chat session for the given scene.
    pub async fn stop(&self, api_key: Option<&str>, scene_id: &str) -> Result<Value> {
        self.request(ACTION_STOP, api_key, scene_id).await
    }

    async fn request(&self, action: &str, api_key: Option<&str>, scene_id: &str) -> Result<Value> {
        let body = VoiceChatRequest {
            scene_id: scene_id.to_owned(),
        };
        self.http.post(PROXY_PATH, Some(action), api_key, &body).await
    }
}

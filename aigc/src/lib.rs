//! Upath AIGC API client for Rust.
//!
//! This crate is a thin façade over the Upath AIGC backend: it attaches a
//! caller-supplied API key to outbound requests and exposes the remote
//! operations (scene/RTC configuration, key validation, voice chat start and
//! stop). All responses pass through one normalization routine, so HTTP-level
//! failures, application-level `ResponseMetadata.Error` envelopes, and
//! malformed bodies surface as a single error shape.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use upath_aigc::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!     let api_key = "your-api-key";
//!
//!     // Check the key, then fetch the configuration for one scene.
//!     let check = client.scene().validate_api_key(Some(api_key)).await;
//!     if !check.valid {
//!         eprintln!("key rejected: {:?}", check.message);
//!         return Ok(());
//!     }
//!
//!     let config = client.scene().get_scenes(Some(api_key), Some("lobby")).await?;
//!     println!("scene config: {config}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Storing a key
//!
//! [`ApiKeyStore`] persists a single key in a [`upath_kv::KVStore`] slot.
//! Storage faults never propagate: a broken store reads as "no key saved".
//! The store and the client are deliberately decoupled; operations always
//! take the key as a parameter.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use upath_aigc::ApiKeyStore;
//! use upath_kv::RedbStore;
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ApiKeyStore::new(Arc::new(RedbStore::open("keys.redb")?));
//! store.set("your-api-key");
//! let key = store.get();
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
pub mod http;
mod keystore;
mod scene;
mod voice;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_BASE_URL};
pub use error::{Error, Result};
pub use http::{API_KEY_HEADER, build_headers};
pub use keystore::{API_KEY_SLOT, ApiKeyStore};
pub use scene::{KeyValidation, SceneService};
pub use voice::VoiceChatService;

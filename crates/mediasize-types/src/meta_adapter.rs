//! Meta adapter trait: generic settings persistence and media metadata.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::MsResult;
use crate::types::{CreateMedia, DerivativeMeta, MediaFile, MediaItem};

/// Persistence boundary of the host platform.
///
/// Settings are a flat key-value store with JSON-encoded values; the
/// caller owns key naming and fallback semantics. Media items carry the
/// backing file path and the derivative metadata written back after
/// regeneration.
#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	// Settings
	//**********
	async fn read_setting(&self, name: &str) -> MsResult<Option<serde_json::Value>>;
	/// Update or create a setting; `None` deletes the entry
	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> MsResult<()>;
	/// List settings, optionally restricted to a key prefix
	async fn list_settings(
		&self,
		prefix: Option<&str>,
	) -> MsResult<HashMap<String, serde_json::Value>>;

	// Media
	//*******
	async fn create_media(&self, media: CreateMedia) -> MsResult<u64>;
	/// Enumerate all image media items, every parent context and status
	async fn list_media(&self) -> MsResult<Vec<MediaItem>>;
	async fn read_media(&self, m_id: u64) -> MsResult<Option<MediaFile>>;
	async fn update_media_meta(&self, m_id: u64, meta: &DerivativeMeta) -> MsResult<()>;
}

// vim: ts=4

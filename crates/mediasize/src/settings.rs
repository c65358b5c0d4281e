//! Settings store service: typed reads and writes over the generic
//! key-value settings facility, with per-key fallback-on-read semantics.

use std::sync::Arc;

use mediasize_types::meta_adapter::MetaAdapter;
use mediasize_types::prelude::*;

/// Settings key of a size's width
pub fn width_key(size: &str) -> String {
	format!("{}_size_w", size)
}

/// Settings key of a size's height
pub fn height_key(size: &str) -> String {
	format!("{}_size_h", size)
}

/// Settings key of a size's crop mode
pub fn crop_key(size: &str) -> String {
	format!("{}_crop", size)
}

/// Typed access to persisted per-size values.
///
/// The store is the sole writer of persisted settings state. Values are
/// JSON-encoded by the meta adapter; dimensions persist as numbers, crop
/// modes as their canonical string form.
pub struct SettingsStore {
	meta: Arc<dyn MetaAdapter>,
}

impl SettingsStore {
	pub fn new(meta: Arc<dyn MetaAdapter>) -> Self {
		Self { meta }
	}

	/// Read a dimension, silently falling back when absent or malformed
	pub async fn get_u32(&self, key: &str, fallback: u32) -> MsResult<u32> {
		Ok(self.get_u32_opt(key).await?.unwrap_or(fallback))
	}

	pub async fn get_u32_opt(&self, key: &str) -> MsResult<Option<u32>> {
		let value = self.meta.read_setting(key).await?;
		Ok(value.as_ref().and_then(parse_u32))
	}

	pub async fn get_crop(&self, key: &str, fallback: CropMode) -> MsResult<CropMode> {
		Ok(self.get_crop_opt(key).await?.unwrap_or(fallback))
	}

	pub async fn get_crop_opt(&self, key: &str) -> MsResult<Option<CropMode>> {
		let value = self.meta.read_setting(key).await?;
		Ok(value.as_ref().map(CropMode::from_setting))
	}

	pub async fn set_u32(&self, key: &str, value: u32) -> MsResult<()> {
		self.meta.update_setting(key, Some(serde_json::json!(value))).await
	}

	pub async fn set_crop(&self, key: &str, mode: CropMode) -> MsResult<()> {
		self.meta.update_setting(key, Some(serde_json::json!(mode.as_setting_str()))).await
	}

	pub async fn delete(&self, key: &str) -> MsResult<()> {
		self.meta.update_setting(key, None).await
	}
}

/// Accept numbers and numeric strings; anything else counts as absent
fn parse_u32(value: &serde_json::Value) -> Option<u32> {
	match value {
		serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
		serde_json::Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}


// vim: ts=4

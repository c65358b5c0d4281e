//! Test adapters and app construction helpers.
//!
//! The in-memory meta adapter and the recording pipeline stand in for
//! the host platform so resolution, reconciliation, and regeneration can
//! be exercised deterministically without a database or pixel work.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mediasize::app::{AppBuilderOpts, AppState};
use mediasize::settings::SettingsStore;
use mediasize::{App, SizeRegistry};
use mediasize_types::error::MsResult;
use mediasize_types::image_pipeline::{ImagePipeline, SizeSpec};
use mediasize_types::meta_adapter::MetaAdapter;
use mediasize_types::types::{CreateMedia, DerivativeMeta, MediaFile, MediaItem};

/// In-memory settings + media store
#[derive(Debug, Default)]
pub struct MemoryMetaAdapter {
	settings: Mutex<HashMap<String, serde_json::Value>>,
	media: Mutex<HashMap<u64, MediaFile>>,
	next_id: Mutex<u64>,
}

impl MemoryMetaAdapter {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Raw view of one stored setting, for assertions
	pub fn setting(&self, name: &str) -> Option<serde_json::Value> {
		self.settings.lock().unwrap().get(name).cloned()
	}

	pub fn seed_setting(&self, name: &str, value: serde_json::Value) {
		self.settings.lock().unwrap().insert(name.to_string(), value);
	}

	pub fn seed_media(&self, title: &str, file: impl AsRef<Path>) -> u64 {
		let mut next_id = self.next_id.lock().unwrap();
		*next_id += 1;
		let m_id = *next_id;
		self.media.lock().unwrap().insert(
			m_id,
			MediaFile { m_id, title: title.into(), file: file.as_ref().into(), meta: None },
		);
		m_id
	}

	pub fn media_meta(&self, m_id: u64) -> Option<DerivativeMeta> {
		self.media.lock().unwrap().get(&m_id).and_then(|media| media.meta.clone())
	}
}

#[async_trait]
impl MetaAdapter for MemoryMetaAdapter {
	async fn read_setting(&self, name: &str) -> MsResult<Option<serde_json::Value>> {
		Ok(self.settings.lock().unwrap().get(name).cloned())
	}

	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> MsResult<()> {
		let mut settings = self.settings.lock().unwrap();
		match value {
			Some(value) => {
				settings.insert(name.to_string(), value);
			}
			None => {
				settings.remove(name);
			}
		}
		Ok(())
	}

	async fn list_settings(
		&self,
		prefix: Option<&str>,
	) -> MsResult<HashMap<String, serde_json::Value>> {
		let settings = self.settings.lock().unwrap();
		Ok(settings
			.iter()
			.filter(|(name, _)| prefix.is_none_or(|p| name.starts_with(p)))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect())
	}

	async fn create_media(&self, media: CreateMedia) -> MsResult<u64> {
		let mut next_id = self.next_id.lock().unwrap();
		*next_id += 1;
		let m_id = *next_id;
		self.media.lock().unwrap().insert(
			m_id,
			MediaFile { m_id, title: media.title, file: media.file, meta: None },
		);
		Ok(m_id)
	}

	async fn list_media(&self) -> MsResult<Vec<MediaItem>> {
		let media = self.media.lock().unwrap();
		let mut items: Vec<MediaItem> =
			media.values().map(|m| MediaItem { m_id: m.m_id, title: m.title.clone() }).collect();
		items.sort_by_key(|item| item.m_id);
		Ok(items)
	}

	async fn read_media(&self, m_id: u64) -> MsResult<Option<MediaFile>> {
		Ok(self.media.lock().unwrap().get(&m_id).cloned())
	}

	async fn update_media_meta(&self, m_id: u64, meta: &DerivativeMeta) -> MsResult<()> {
		if let Some(media) = self.media.lock().unwrap().get_mut(&m_id) {
			media.meta = Some(meta.clone());
		}
		Ok(())
	}
}

/// How the recording pipeline should respond to `generate`
#[derive(Debug, Clone)]
pub enum GenerateBehavior {
	Meta(DerivativeMeta),
	Empty,
	Fail,
}

/// Pipeline double that records registrations and generate calls
#[derive(Debug)]
pub struct RecordingPipeline {
	pub registered: Mutex<Vec<SizeSpec>>,
	pub generated: Mutex<Vec<PathBuf>>,
	behavior: Mutex<GenerateBehavior>,
}

impl RecordingPipeline {
	pub fn new() -> Arc<Self> {
		Arc::new(Self {
			registered: Mutex::new(Vec::new()),
			generated: Mutex::new(Vec::new()),
			behavior: Mutex::new(GenerateBehavior::Empty),
		})
	}

	pub fn respond_with(&self, behavior: GenerateBehavior) {
		*self.behavior.lock().unwrap() = behavior;
	}

	pub fn registered_names(&self) -> Vec<String> {
		self.registered.lock().unwrap().iter().map(|spec| spec.name.to_string()).collect()
	}
}

#[async_trait]
impl ImagePipeline for RecordingPipeline {
	async fn register_size(&self, spec: SizeSpec) -> MsResult<()> {
		let mut registered = self.registered.lock().unwrap();
		registered.retain(|existing| existing.name != spec.name);
		registered.push(spec);
		Ok(())
	}

	async fn generate(&self, path: &Path) -> MsResult<DerivativeMeta> {
		self.generated.lock().unwrap().push(path.to_path_buf());
		match self.behavior.lock().unwrap().clone() {
			GenerateBehavior::Meta(meta) => Ok(meta),
			GenerateBehavior::Empty => Ok(DerivativeMeta::default()),
			GenerateBehavior::Fail => Err(mediasize_types::error::Error::Internal(
				"pipeline exploded".to_string(),
			)),
		}
	}
}

/// Build an app around the given registry and test adapters
pub fn test_app(
	registry: SizeRegistry,
	meta: Arc<MemoryMetaAdapter>,
	pipeline: Arc<RecordingPipeline>,
) -> App {
	Arc::new(AppState {
		opts: AppBuilderOpts { listen: "127.0.0.1:0".into() },
		sizes: Arc::new(registry.freeze()),
		settings: Arc::new(SettingsStore::new(meta.clone())),
		meta_adapter: meta,
		pipeline,
	})
}

/// Registry with the standard reported sizes and one theme size
pub fn standard_registry() -> SizeRegistry {
	let mut registry = SizeRegistry::new();
	registry.report("medium");
	registry.report("medium_large");
	registry.report("large");
	registry.register_additional("gallery", 600, 400, mediasize_types::crop::CropMode::Disabled);
	registry
}

//! Settings resolver integration tests

mod common;

use common::{standard_registry, test_app, MemoryMetaAdapter, RecordingPipeline};
use mediasize::registry::RESERVED_SIZES;
use mediasize::{resolver, SizeRegistry};
use mediasize_types::crop::{CropAnchor, CropMode};

#[tokio::test]
async fn test_defaults_only_always_includes_every_reserved_size() {
	// host reports nothing at all
	let app = test_app(SizeRegistry::new(), MemoryMetaAdapter::new(), RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, true).await.unwrap();

	for name in RESERVED_SIZES {
		assert!(sizes.contains_key(*name), "missing reserved size {}", name);
	}
	assert_eq!(sizes.len(), RESERVED_SIZES.len());
}

#[tokio::test]
async fn test_defaults_only_appends_reserved_after_reported() {
	let meta = MemoryMetaAdapter::new();
	let app = test_app(standard_registry(), meta, RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, true).await.unwrap();

	let order: Vec<&str> = sizes.keys().map(AsRef::as_ref).collect();
	// reported order first, missing reserved (thumbnail) appended at the end
	assert_eq!(order, vec!["medium", "medium_large", "large", "gallery", "thumbnail"]);
}

#[tokio::test]
async fn test_additional_size_without_override_resolves_to_registration() {
	let app = test_app(standard_registry(), MemoryMetaAdapter::new(), RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	let gallery = sizes.get("gallery").unwrap();
	assert_eq!((gallery.width, gallery.height), (600, 400));
	assert_eq!(gallery.crop, CropMode::Disabled);
}

#[tokio::test]
async fn test_additional_size_overrides_apply_per_field() {
	let meta = MemoryMetaAdapter::new();
	// only the width is overridden; height and crop keep registration defaults
	meta.seed_setting("gallery_size_w", serde_json::json!(800));
	let app = test_app(standard_registry(), meta, RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	let gallery = sizes.get("gallery").unwrap();
	assert_eq!(gallery.width, 800);
	assert_eq!(gallery.height, 400);
	assert_eq!(gallery.crop, CropMode::Disabled);
}

#[tokio::test]
async fn test_stored_anchor_crop_resolves_to_anchored_mode() {
	let meta = MemoryMetaAdapter::new();
	meta.seed_setting("large_crop", serde_json::json!("left top"));
	let app = test_app(standard_registry(), meta, RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	assert_eq!(sizes.get("large").unwrap().crop, CropMode::Anchored(CropAnchor::LeftTop));
}

#[tokio::test]
async fn test_reserved_size_falls_back_to_compiled_default() {
	// nothing stored: medium_large resolves to its compiled 768x0
	let app = test_app(standard_registry(), MemoryMetaAdapter::new(), RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	let medium_large = sizes.get("medium_large").unwrap();
	assert_eq!((medium_large.width, medium_large.height), (768, 0));
}

#[tokio::test]
async fn test_defaults_only_bypasses_stored_overrides() {
	let meta = MemoryMetaAdapter::new();
	meta.seed_setting("medium_size_w", serde_json::json!(99));
	meta.seed_setting("medium_crop", serde_json::json!("1"));
	let app = test_app(standard_registry(), meta, RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, true).await.unwrap();

	let medium = sizes.get("medium").unwrap();
	assert_eq!(medium.width, 300);
	assert_eq!(medium.crop, CropMode::Disabled);
}

#[tokio::test]
async fn test_unrecognized_reported_size_is_skipped() {
	let mut registry = standard_registry();
	registry.report("post-banner");
	let app = test_app(registry, MemoryMetaAdapter::new(), RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	assert!(!sizes.contains_key("post-banner"));
	assert!(sizes.contains_key("gallery"));
}

#[tokio::test]
async fn test_malformed_stored_value_falls_back_silently() {
	let meta = MemoryMetaAdapter::new();
	meta.seed_setting("large_size_w", serde_json::json!("wide"));
	let app = test_app(standard_registry(), meta, RecordingPipeline::new());

	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await.unwrap();

	assert_eq!(sizes.get("large").unwrap().width, 1024);
}

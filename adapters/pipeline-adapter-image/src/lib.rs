//! Image pipeline adapter backed by the `image` crate.
//!
//! Holds the registered size list and renders JPEG derivatives of one
//! original per registered size. Proportional sizes fit within their
//! bounds and never upscale; cropped sizes scale to cover and cut the
//! window at the configured anchor.

use std::path::Path;
use std::sync::RwLock;
use std::time::Instant;

use async_trait::async_trait;
use image::{imageops, DynamicImage, ImageReader};

use mediasize::crop::{CropAnchor, CropMode};
use mediasize::image_pipeline::{ImagePipeline, SizeSpec};
use mediasize::prelude::*;
use mediasize::types::{DerivativeInfo, DerivativeMeta};

#[derive(Debug)]
pub struct PipelineAdapterImage {
	out_dir: Box<Path>,
	registered: RwLock<Vec<SizeSpec>>,
}

impl PipelineAdapterImage {
	pub fn new(out_dir: impl Into<Box<Path>>) -> Self {
		Self { out_dir: out_dir.into(), registered: RwLock::new(Vec::new()) }
	}

	/// Snapshot of the registered sizes
	pub fn registered(&self) -> MsResult<Vec<SizeSpec>> {
		Ok(self
			.registered
			.read()
			.map_err(|_| Error::Internal("size registration lock poisoned".to_string()))?
			.clone())
	}
}

#[async_trait]
impl ImagePipeline for PipelineAdapterImage {
	async fn register_size(&self, spec: SizeSpec) -> MsResult<()> {
		debug!("Registering size {} {}x{} crop={}", spec.name, spec.width, spec.height, spec.crop);
		let mut registered = self
			.registered
			.write()
			.map_err(|_| Error::Internal("size registration lock poisoned".to_string()))?;
		registered.retain(|existing| existing.name != spec.name);
		registered.push(spec);
		Ok(())
	}

	async fn generate(&self, path: &Path) -> MsResult<DerivativeMeta> {
		let sizes = self.registered()?;
		let path = path.to_path_buf();
		let out_dir = self.out_dir.clone();

		tokio::task::spawn_blocking(move || generate_sync(&path, &out_dir, &sizes))
			.await
			.map_err(|err| Error::Internal(format!("generate task failed: {}", err)))?
	}
}

// Sync derivative generator
fn generate_sync(path: &Path, out_dir: &Path, sizes: &[SizeSpec]) -> MsResult<DerivativeMeta> {
	let now = Instant::now();
	let original = ImageReader::open(path)?
		.with_guessed_format()?
		.decode()
		.map_err(|err| {
			warn!("Cannot decode {:?}: {}", path, err);
			Error::GenerationFailed
		})?;
	debug!("decoded {:?} [{}ms]", path, now.elapsed().as_millis());

	let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
	let mut meta = DerivativeMeta::default();

	for spec in sizes {
		let Some(derivative) = render_size(&original, spec) else {
			debug!("Skipping size {} for {:?}", spec.name, path);
			continue;
		};

		let (width, height) = (derivative.width(), derivative.height());
		let file_name = format!("{}-{}x{}.jpg", stem, width, height);
		let out_path = out_dir.join(&file_name);
		derivative.to_rgb8().save(&out_path).map_err(|err| {
			warn!("Cannot write {:?}: {}", out_path, err);
			Error::GenerationFailed
		})?;

		meta.insert(spec.name.clone(), DerivativeInfo { file: file_name.into(), width, height });
	}

	info!("Generated {} derivatives for {:?} [{}ms]", meta.sizes.len(), path, now.elapsed().as_millis());
	Ok(meta)
}

/// Render one registered size, or `None` when the size does not apply
/// (both dimensions unconstrained, or the source is too small).
fn render_size(original: &DynamicImage, spec: &SizeSpec) -> Option<DynamicImage> {
	let orig = (original.width(), original.height());

	if spec.crop.is_enabled() && spec.width > 0 && spec.height > 0 {
		let (scaled_w, scaled_h) = cover_dimensions(orig, (spec.width, spec.height))?;
		let scaled = original.resize_exact(scaled_w, scaled_h, imageops::FilterType::Lanczos3);
		let (x, y) = crop_offset((scaled_w, scaled_h), (spec.width, spec.height), spec.crop);
		Some(scaled.crop_imm(x, y, spec.width, spec.height))
	} else {
		let (width, height) = fit_dimensions(orig, (spec.width, spec.height))?;
		Some(original.resize_exact(width, height, imageops::FilterType::Lanczos3))
	}
}

/// Proportional fit within the bounds (0 = unconstrained), never upscaling
fn fit_dimensions(orig: (u32, u32), bounds: (u32, u32)) -> Option<(u32, u32)> {
	let (orig_w, orig_h) = orig;
	let (bound_w, bound_h) = bounds;
	if orig_w == 0 || orig_h == 0 {
		return None;
	}

	let scale_w = if bound_w == 0 { f64::INFINITY } else { f64::from(bound_w) / f64::from(orig_w) };
	let scale_h = if bound_h == 0 { f64::INFINITY } else { f64::from(bound_h) / f64::from(orig_h) };
	let scale = scale_w.min(scale_h);
	if !scale.is_finite() || scale >= 1.0 {
		return None;
	}

	let width = (f64::from(orig_w) * scale).round().max(1.0) as u32;
	let height = (f64::from(orig_h) * scale).round().max(1.0) as u32;
	Some((width, height))
}

/// Scale to cover the target, never upscaling; result is >= target in
/// both dimensions
fn cover_dimensions(orig: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
	let (orig_w, orig_h) = orig;
	let (target_w, target_h) = target;
	if orig_w < target_w || orig_h < target_h {
		return None;
	}

	let scale =
		(f64::from(target_w) / f64::from(orig_w)).max(f64::from(target_h) / f64::from(orig_h));
	let width = ((f64::from(orig_w) * scale).round() as u32).max(target_w);
	let height = ((f64::from(orig_h) * scale).round() as u32).max(target_h);
	Some((width, height))
}

/// Crop window offset within the scaled image
fn crop_offset(scaled: (u32, u32), target: (u32, u32), crop: CropMode) -> (u32, u32) {
	let slack_x = scaled.0 - target.0;
	let slack_y = scaled.1 - target.1;

	match crop {
		CropMode::Disabled | CropMode::Centered => (slack_x / 2, slack_y / 2),
		CropMode::Anchored(anchor) => {
			let x = match anchor {
				CropAnchor::LeftTop | CropAnchor::LeftCenter | CropAnchor::LeftBottom => 0,
				CropAnchor::CenterTop | CropAnchor::CenterBottom => slack_x / 2,
				CropAnchor::RightTop | CropAnchor::RightCenter | CropAnchor::RightBottom => slack_x,
			};
			let y = match anchor {
				CropAnchor::LeftTop | CropAnchor::CenterTop | CropAnchor::RightTop => 0,
				CropAnchor::LeftCenter | CropAnchor::RightCenter => slack_y / 2,
				CropAnchor::LeftBottom | CropAnchor::CenterBottom | CropAnchor::RightBottom => {
					slack_y
				}
			};
			(x, y)
		}
	}
}


// vim: ts=4

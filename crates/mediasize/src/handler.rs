//! HTTP handlers for the size settings, reset, and regeneration surface

use axum::{
	extract::{Path, Query, State},
	Json,
};
use serde::{Deserialize, Serialize};

use mediasize_types::types::MediaItem;

use crate::prelude::*;
use crate::reconcile::{self, ResetTrigger};
use crate::regenerate;
use crate::resolver;
use crate::settings::{crop_key, height_key, width_key};

/// One resolved size as shown in the settings UI
#[derive(Debug, Serialize)]
pub struct SizeView {
	pub name: Box<str>,
	pub width: u32,
	pub height: u32,
	pub crop: CropMode,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetSizesQuery {
	/// Bypass stored overrides and show compiled/registered defaults
	#[serde(default)]
	pub defaults: bool,
}

/// GET /api/sizes - resolved effective size map
pub async fn get_sizes(
	State(app): State<App>,
	Query(query): Query<GetSizesQuery>,
) -> MsResult<Json<Vec<SizeView>>> {
	let sizes = resolver::resolve(&app.sizes, &app.settings, query.defaults).await?;

	let views = sizes
		.into_iter()
		.map(|(name, value)| SizeView {
			name,
			width: value.width,
			height: value.height,
			crop: value.crop,
		})
		.collect();

	Ok(Json(views))
}

/// PUT /api/sizes/{name} - persist overrides for one size
/// Only fields present in the request are written.
#[derive(Debug, Deserialize)]
pub struct UpdateSizeRequest {
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub crop: Option<CropMode>,
}

pub async fn put_size(
	State(app): State<App>,
	Path(name): Path<String>,
	Json(req): Json<UpdateSizeRequest>,
) -> MsResult<Json<SizeView>> {
	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await?;
	if !sizes.contains_key(name.as_str()) {
		warn!("put_size: unknown size {}", name);
		return Err(Error::NotFound);
	}

	if let Some(width) = req.width {
		app.settings.set_u32(&width_key(&name), width).await?;
	}
	if let Some(height) = req.height {
		app.settings.set_u32(&height_key(&name), height).await?;
	}
	if let Some(crop) = req.crop {
		app.settings.set_crop(&crop_key(&name), crop).await?;
	}

	info!("Updated size {}", name);

	// return the freshly resolved value
	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await?;
	let value = *sizes.get(name.as_str()).ok_or(Error::NotFound)?;

	Ok(Json(SizeView {
		name: name.into(),
		width: value.width,
		height: value.height,
		crop: value.crop,
	}))
}

/// POST /api/sizes/reset?size={name} - reset one size, or all when empty
#[derive(Debug, Default, Deserialize)]
pub struct ResetQuery {
	pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
	pub reset: bool,
}

pub async fn post_reset(
	State(app): State<App>,
	Query(query): Query<ResetQuery>,
) -> MsResult<Json<ResetResponse>> {
	let trigger = match query.size.as_deref() {
		None | Some("") => ResetTrigger::FullReset,
		Some(name) => ResetTrigger::SinglePresetReset(name.into()),
	};

	reconcile::reconcile(&app, &trigger).await?;

	// re-register so the live pipeline reflects the restored values
	crate::init(&app).await?;

	Ok(Json(ResetResponse { reset: true }))
}

/// GET /api/regenerate?item={id} - enumeration of regeneration targets,
/// optionally filtered to one item
#[derive(Debug, Default, Deserialize)]
pub struct RegenerateQuery {
	pub item: Option<u64>,
}

pub async fn get_regenerate_targets(
	State(app): State<App>,
	Query(query): Query<RegenerateQuery>,
) -> MsResult<Json<Vec<MediaItem>>> {
	let mut targets = regenerate::list_targets(&app).await?;
	if let Some(item) = query.item {
		targets.retain(|target| target.m_id == item);
	}
	Ok(Json(targets))
}

/// POST /api/regenerate/{id} - regenerate one media item.
/// Per-item failures come back as `ok: false` so a driving loop can
/// report them and continue with the remaining items.
#[derive(Debug, Serialize)]
pub struct RegenerateResponse {
	pub id: u64,
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<&'static str>,
}

pub async fn post_regenerate(
	State(app): State<App>,
	Path(m_id): Path<u64>,
) -> MsResult<Json<RegenerateResponse>> {
	match regenerate::regenerate_item(&app, m_id).await {
		Ok(_) => Ok(Json(RegenerateResponse { id: m_id, ok: true, error: None })),
		Err(Error::NotFound) => {
			Ok(Json(RegenerateResponse { id: m_id, ok: false, error: Some("notFound") }))
		}
		Err(Error::GenerationFailed) => {
			Ok(Json(RegenerateResponse { id: m_id, ok: false, error: Some("generationFailed") }))
		}
		Err(err) => Err(err),
	}
}

// vim: ts=4

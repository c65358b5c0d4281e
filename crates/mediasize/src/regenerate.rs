//! Media regeneration: target enumeration and per-item derivative rebuild.
//!
//! Only the single-item operation and the enumeration live here; batch
//! sequencing, progress reporting, and continue-on-error policy belong
//! to the driving caller. Each item is independently retryable.

use mediasize_types::types::{DerivativeMeta, MediaItem};

use crate::prelude::*;

/// Enumerate all regeneration targets, freshly computed on every call
pub async fn list_targets(app: &App) -> MsResult<Vec<MediaItem>> {
	app.meta_adapter.list_media().await
}

/// Regenerate the derivatives of one media item.
///
/// Fails with `NotFound` when the item or its backing file is missing,
/// and with `GenerationFailed` when the pipeline errors or produces
/// empty metadata. On failure nothing is persisted; existing derivative
/// metadata stays intact.
pub async fn regenerate_item(app: &App, m_id: u64) -> MsResult<DerivativeMeta> {
	let media = app.meta_adapter.read_media(m_id).await?.ok_or_else(|| {
		warn!("regenerate: media item {} not found", m_id);
		Error::NotFound
	})?;

	if tokio::fs::metadata(&media.file).await.is_err() {
		warn!("regenerate: backing file {:?} of media {} is missing", media.file, m_id);
		return Err(Error::NotFound);
	}

	let meta = match app.pipeline.generate(&media.file).await {
		Ok(meta) if !meta.is_empty() => meta,
		Ok(_) => {
			warn!("regenerate: no derivatives produced for media {}", m_id);
			return Err(Error::GenerationFailed);
		}
		Err(err) => {
			warn!("regenerate: pipeline failed for media {}: {}", m_id, err);
			return Err(Error::GenerationFailed);
		}
	};

	app.meta_adapter.update_media_meta(m_id, &meta).await?;
	info!("Regenerated {} derivatives for media {} ({})", meta.sizes.len(), m_id, media.title);

	Ok(meta)
}

// vim: ts=4

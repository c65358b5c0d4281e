//! Effective size resolution.
//!
//! Merges compiled-in reserved defaults, additional-size registrations,
//! and stored overrides into one ordered map. Pure read over the frozen
//! registry and the settings store; recomputed on every call, never
//! cached.

use indexmap::IndexMap;

use crate::prelude::*;
use crate::registry::{self, FrozenSizeRegistry, SizeValue};
use crate::settings::{crop_key, height_key, width_key, SettingsStore};

/// Ordered map of size name to resolved value
pub type EffectiveSizes = IndexMap<Box<str>, SizeValue>;

/// Resolve the effective value of every known size.
///
/// With `defaults_only` the stored overrides are bypassed and any
/// reserved size the host did not report is appended at the end, so
/// reset and deactivation always see the complete reserved set.
pub async fn resolve(
	registry: &FrozenSizeRegistry,
	store: &SettingsStore,
	defaults_only: bool,
) -> MsResult<EffectiveSizes> {
	let mut sizes = EffectiveSizes::new();

	for name in registry.reported() {
		if let Some(default) = registry::reserved_default(name) {
			let value = if defaults_only {
				default
			} else {
				SizeValue {
					width: store.get_u32(&width_key(name), default.width).await?,
					height: store.get_u32(&height_key(name), default.height).await?,
					crop: store.get_crop(&crop_key(name), default.crop).await?,
				}
			};
			sizes.insert(name.into(), value);
		} else if let Some(registration) = registry.additional(name) {
			let mut value = *registration;
			if !defaults_only {
				// each field falls back per-field, not wholesale
				if let Some(width) = store.get_u32_opt(&width_key(name)).await? {
					value.width = width;
				}
				if let Some(height) = store.get_u32_opt(&height_key(name)).await? {
					value.height = height;
				}
				if let Some(crop) = store.get_crop_opt(&crop_key(name)).await? {
					value.crop = crop;
				}
			}
			sizes.insert(name.into(), value);
		} else {
			// host reports a size this system does not recognize
			debug!("Skipping unrecognized size: {}", name);
		}
	}

	if defaults_only {
		for name in registry::RESERVED_SIZES {
			if !sizes.contains_key(*name) {
				if let Some(default) = registry::reserved_default(name) {
					sizes.insert((*name).into(), default);
				}
			}
		}
	}

	Ok(sizes)
}

// vim: ts=4

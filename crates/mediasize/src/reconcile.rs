//! Lifecycle reconciliation of persisted size settings.
//!
//! Brings the settings store back to a known state on explicit reset or
//! on deactivation. The retention rules differ per size category:
//! reserved sizes are restored to compiled defaults, plugin-owned
//! entries are deleted, and host-owned dimensions survive deactivation
//! untouched.

use crate::prelude::*;
use crate::registry;
use crate::resolver;
use crate::settings::{crop_key, height_key, width_key};

/// What caused the reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetTrigger {
	/// Explicit "reset all sizes"
	FullReset,
	/// Explicit per-size reset
	SinglePresetReset(Box<str>),
	/// System disable, no explicit user intent
	Deactivation,
}

impl ResetTrigger {
	/// Whether the user explicitly asked for a reset
	pub fn is_explicit(&self) -> bool {
		!matches!(self, Self::Deactivation)
	}
}

/// Reconcile persisted settings against the trigger.
///
/// Iterates the defaults-resolved effective map in order. Step order
/// matters: the crop step runs before the deactivation early-stop, and
/// the early-stop fires at whatever position the first host-owned size
/// occupies in the iteration.
pub async fn reconcile(app: &App, trigger: &ResetTrigger) -> MsResult<()> {
	let sizes = resolver::resolve(&app.sizes, &app.settings, true).await?;

	for (name, default) in &sizes {
		let name = name.as_ref();

		if let ResetTrigger::SinglePresetReset(target) = trigger {
			if name != target.as_ref() {
				continue;
			}
		}

		if name == "thumbnail" {
			// thumbnail crop is a host-facing default: only an explicit
			// reset may restore it, deactivation leaves it alone
			if trigger.is_explicit() {
				app.settings.set_crop(&crop_key(name), default.crop).await?;
			}
		} else {
			// every other crop entry is plugin-owned state
			app.settings.delete(&crop_key(name)).await?;
		}

		if *trigger == ResetTrigger::Deactivation && registry::is_host_owned(name) {
			info!("Deactivation reached host-owned size {}, leaving dimensions untouched", name);
			return Ok(());
		}

		if registry::is_reserved(name) {
			app.settings.set_u32(&width_key(name), default.width).await?;
			app.settings.set_u32(&height_key(name), default.height).await?;
		} else {
			app.settings.delete(&width_key(name)).await?;
			app.settings.delete(&height_key(name)).await?;
		}
	}

	info!("Reconciled size settings ({:?})", trigger);
	Ok(())
}

// vim: ts=4

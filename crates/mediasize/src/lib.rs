//! Image-size preset management for a CMS platform.
//!
//! Mediasize merges compiled-in platform defaults, theme-registered
//! additional sizes, and stored user overrides into one effective view,
//! installs that view into the image pipeline, reconciles persisted
//! settings across reset/deactivation, and regenerates derivative images
//! per media item.

pub mod app;
pub mod handler;
pub mod prelude;
pub mod reconcile;
pub mod regenerate;
pub mod registry;
pub mod resolver;
pub mod routes;
pub mod settings;

pub use app::{App, AppBuilder, AppState};
pub use registry::{FrozenSizeRegistry, SizeRegistry, SizeValue};

use mediasize_types::image_pipeline::SizeSpec;

use crate::prelude::*;

/// Install the resolved size map into the image pipeline.
///
/// Two-phase on purpose: the full effective map is computed first (pure),
/// then every size is registered, so registration order can never affect
/// resolution.
pub async fn init(app: &App) -> MsResult<()> {
	let sizes = resolver::resolve(&app.sizes, &app.settings, false).await?;
	for (name, value) in &sizes {
		app.pipeline
			.register_size(SizeSpec::new(name.clone(), value.width, value.height, value.crop))
			.await?;
	}
	info!("Registered {} image sizes", sizes.len());
	Ok(())
}

/// Disable hook: reconcile persisted settings with no explicit user intent
pub async fn deactivate(app: &App) -> MsResult<()> {
	reconcile::reconcile(app, &reconcile::ResetTrigger::Deactivation).await
}

// vim: ts=4

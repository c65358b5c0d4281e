//! App state and builder

use std::sync::Arc;

use tracing::{error, info};

use mediasize_types::crop::CropMode;
use mediasize_types::error::{Error, MsResult};
use mediasize_types::image_pipeline::ImagePipeline;
use mediasize_types::meta_adapter::MetaAdapter;

use crate::registry::{FrozenSizeRegistry, SizeRegistry};
use crate::routes;
use crate::settings::SettingsStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

pub struct AppState {
	pub opts: AppBuilderOpts,
	/// Frozen snapshot of reported and registered sizes
	pub sizes: Arc<FrozenSizeRegistry>,
	pub meta_adapter: Arc<dyn MetaAdapter>,
	pub pipeline: Arc<dyn ImagePipeline>,
	pub settings: Arc<SettingsStore>,
}

pub type App = Arc<AppState>;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	registry: SizeRegistry,
	meta_adapter: Option<Arc<dyn MetaAdapter>>,
	pipeline: Option<Arc<dyn ImagePipeline>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8080".into() },
			registry: SizeRegistry::new(),
			meta_adapter: None,
			pipeline: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Sizes
	/// Report a host intermediate size (order preserving)
	pub fn report_size(&mut self, name: impl Into<Box<str>>) -> &mut Self {
		self.registry.report(name);
		self
	}

	/// Register a theme/embedder size with its defaults
	pub fn register_size(
		&mut self,
		name: impl Into<Box<str>>,
		width: u32,
		height: u32,
		crop: CropMode,
	) -> &mut Self {
		self.registry.register_additional(name, width, height, crop);
		self
	}

	// Adapters
	pub fn meta_adapter(&mut self, meta_adapter: Arc<dyn MetaAdapter>) -> &mut Self {
		self.meta_adapter = Some(meta_adapter);
		self
	}

	pub fn pipeline(&mut self, pipeline: Arc<dyn ImagePipeline>) -> &mut Self {
		self.pipeline = Some(pipeline);
		self
	}

	/// Validate adapters, freeze the size registry, and build the app
	pub fn build(self) -> MsResult<App> {
		let Some(meta_adapter) = self.meta_adapter else {
			error!("FATAL: No meta adapter configured");
			return Err(Error::Internal("No meta adapter configured".to_string()));
		};
		let Some(pipeline) = self.pipeline else {
			error!("FATAL: No image pipeline configured");
			return Err(Error::Internal("No image pipeline configured".to_string()));
		};

		let settings = Arc::new(SettingsStore::new(meta_adapter.clone()));

		Ok(Arc::new(AppState {
			opts: self.opts,
			sizes: Arc::new(self.registry.freeze()),
			meta_adapter,
			pipeline,
			settings,
		}))
	}

	pub async fn run(self) -> MsResult<()> {
		info!("Mediasize v{}", VERSION);

		let app = self.build()?;

		// two-phase: resolve first, then register with the pipeline
		crate::init(&app).await?;

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4

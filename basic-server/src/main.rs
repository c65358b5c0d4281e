use std::{env, path};

use mediasize::AppBuilder;
use mediasize_meta_adapter_sqlite::MetaAdapterSqlite;
use mediasize_pipeline_adapter_image::PipelineAdapterImage;
use mediasize_types::crop::CropMode;
use std::sync::Arc;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub media_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		media_dir: path::PathBuf::from(env::var("MEDIA_DIR").unwrap_or("./data/media".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
	};

	tokio::fs::create_dir_all(&config.db_dir).await?;
	tokio::fs::create_dir_all(&config.media_dir).await?;

	let meta_adapter = Arc::new(MetaAdapterSqlite::new(config.db_dir.join("meta.db")).await?);
	let pipeline = Arc::new(PipelineAdapterImage::new(config.media_dir.as_path()));

	let mut builder = AppBuilder::new();
	builder
		.listen(config.listen)
		.meta_adapter(meta_adapter)
		.pipeline(pipeline)
		// the host platform's editable intermediate sizes
		.report_size("medium")
		.report_size("medium_large")
		.report_size("large")
		// theme sizes
		.register_size("gallery", 600, 400, CropMode::Disabled);

	builder.run().await?;

	Ok(())
}

// vim: ts=4

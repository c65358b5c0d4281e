//! SQLite-backed meta adapter for Mediasize.
//!
//! Persists the generic settings key-value store and the media item
//! metadata in one database file.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use mediasize::meta_adapter::MetaAdapter;
use mediasize::prelude::*;
use mediasize::types::{CreateMedia, DerivativeMeta, MediaFile, MediaItem};

mod media;
mod schema;
mod setting;

use schema::init_db;

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> MsResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// Settings
	//**********
	async fn read_setting(&self, name: &str) -> MsResult<Option<serde_json::Value>> {
		setting::read(&self.db, name).await
	}

	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> MsResult<()> {
		setting::update(&self.db, name, value).await
	}

	async fn list_settings(
		&self,
		prefix: Option<&str>,
	) -> MsResult<HashMap<String, serde_json::Value>> {
		setting::list(&self.db, prefix).await
	}

	// Media
	//*******
	async fn create_media(&self, media: CreateMedia) -> MsResult<u64> {
		media::create(&self.db, media).await
	}

	async fn list_media(&self) -> MsResult<Vec<MediaItem>> {
		media::list(&self.db).await
	}

	async fn read_media(&self, m_id: u64) -> MsResult<Option<MediaFile>> {
		media::read(&self.db, m_id).await
	}

	async fn update_media_meta(&self, m_id: u64, meta: &DerivativeMeta) -> MsResult<()> {
		media::update_meta(&self.db, m_id, meta).await
	}
}

// vim: ts=4

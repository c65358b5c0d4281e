//! Media item metadata management

use std::path::PathBuf;

use sqlx::{Row, SqlitePool};

use mediasize::prelude::*;
use mediasize::types::{CreateMedia, DerivativeMeta, MediaFile, MediaItem};

pub(crate) async fn create(db: &SqlitePool, media: CreateMedia) -> MsResult<u64> {
	let file = media.file.to_string_lossy().into_owned();
	let res = sqlx::query("INSERT INTO media (title, file) VALUES (?, ?)")
		.bind(media.title.as_ref())
		.bind(file)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(res.last_insert_rowid() as u64)
}

/// List all media items, oldest first
pub(crate) async fn list(db: &SqlitePool) -> MsResult<Vec<MediaItem>> {
	let rows = sqlx::query("SELECT m_id, title FROM media ORDER BY m_id")
		.fetch_all(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(rows
		.into_iter()
		.map(|row| {
			let m_id: i64 = row.get("m_id");
			let title: String = row.get("title");
			MediaItem { m_id: m_id as u64, title: title.into() }
		})
		.collect())
}

pub(crate) async fn read(db: &SqlitePool, m_id: u64) -> MsResult<Option<MediaFile>> {
	let row = sqlx::query("SELECT m_id, title, file, meta FROM media WHERE m_id = ?")
		.bind(m_id as i64)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|row| {
		let title: String = row.get("title");
		let file: String = row.get("file");
		let meta: Option<String> = row.get("meta");
		MediaFile {
			m_id,
			title: title.into(),
			file: PathBuf::from(file).into(),
			meta: meta.and_then(|m| serde_json::from_str::<DerivativeMeta>(&m).ok()),
		}
	}))
}

pub(crate) async fn update_meta(db: &SqlitePool, m_id: u64, meta: &DerivativeMeta) -> MsResult<()> {
	let meta_str = serde_json::to_string(meta)
		.map_err(|err| Error::Internal(format!("Cannot serialize media meta: {}", err)))?;

	sqlx::query("UPDATE media SET meta = ? WHERE m_id = ?")
		.bind(meta_str)
		.bind(m_id as i64)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4

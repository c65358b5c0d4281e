//! Settings key-value store management
//!
//! Handles persistent storage of settings as JSON-encoded values.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use mediasize::prelude::*;

/// List all settings, optionally restricted to a key prefix
pub(crate) async fn list(
	db: &SqlitePool,
	prefix: Option<&str>,
) -> MsResult<HashMap<String, serde_json::Value>> {
	let rows = if let Some(prefix) = prefix {
		sqlx::query("SELECT name, value FROM settings WHERE name LIKE ? || '%'")
			.bind(prefix)
			.fetch_all(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?
	} else {
		sqlx::query("SELECT name, value FROM settings")
			.fetch_all(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?
	};

	let mut settings = HashMap::new();
	for row in rows {
		let name: String = row.get("name");
		let value: Option<String> = row.get("value");
		settings.insert(
			name,
			value
				.and_then(|v| serde_json::from_str(&v).ok())
				.unwrap_or(serde_json::Value::Null),
		);
	}

	Ok(settings)
}

/// Read a single setting by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> MsResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| {
		let value: Option<String> = r.get("value");
		value.and_then(|v| serde_json::from_str(&v).ok())
	}))
}

/// Update or create a setting; `None` deletes the entry
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> MsResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query("INSERT OR REPLACE INTO settings (name, value) VALUES (?, ?)")
			.bind(name)
			.bind(value_str)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	} else {
		sqlx::query("DELETE FROM settings WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4

//! Database schema initialization

use sqlx::SqlitePool;

/// Create the tables if they do not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		name text NOT NULL,
		value text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Media items
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS media (
		m_id integer PRIMARY KEY AUTOINCREMENT,
		title text NOT NULL,
		file text NOT NULL,
		meta json,
		created_at datetime DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4

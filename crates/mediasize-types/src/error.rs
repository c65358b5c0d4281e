//! Error type shared across the workspace.

use axum::{http::StatusCode, response::IntoResponse};

pub type MsResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Media item or its backing file is missing
	NotFound,
	/// The image pipeline reported an error or produced empty metadata.
	/// Soft failure: nothing is persisted, existing derivatives stay intact.
	GenerationFailed,
	ValidationError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::GenerationFailed => write!(f, "derivative generation failed"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response(),
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4

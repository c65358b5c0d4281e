//! Media item and derivative metadata types.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One generated derivative of a media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeInfo {
	/// Derivative file name, relative to the media directory
	pub file: Box<str>,
	pub width: u32,
	pub height: u32,
}

/// Derivative metadata of one media item: size name -> generated file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeMeta {
	pub sizes: HashMap<Box<str>, DerivativeInfo>,
}

impl DerivativeMeta {
	pub fn is_empty(&self) -> bool {
		self.sizes.is_empty()
	}

	pub fn insert(&mut self, name: impl Into<Box<str>>, info: DerivativeInfo) {
		self.sizes.insert(name.into(), info);
	}
}

/// Listing view of a media item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
	#[serde(rename = "id")]
	pub m_id: u64,
	pub title: Box<str>,
}

/// Full media record with its backing file
#[derive(Debug, Clone)]
pub struct MediaFile {
	pub m_id: u64,
	pub title: Box<str>,
	/// Path of the original upload
	pub file: Box<Path>,
	pub meta: Option<DerivativeMeta>,
}

/// Data for registering a media item with the meta adapter
#[derive(Debug, Clone)]
pub struct CreateMedia {
	pub title: Box<str>,
	pub file: Box<Path>,
}

// vim: ts=4

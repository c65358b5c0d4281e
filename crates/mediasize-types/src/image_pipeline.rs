//! Image pipeline trait: size registration and derivative generation.

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::crop::CropMode;
use crate::error::MsResult;
use crate::types::DerivativeMeta;

/// Fully resolved size as handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
	pub name: Box<str>,
	/// 0 = unconstrained
	pub width: u32,
	/// 0 = unconstrained
	pub height: u32,
	pub crop: CropMode,
}

impl SizeSpec {
	pub fn new(name: impl Into<Box<str>>, width: u32, height: u32, crop: CropMode) -> Self {
		Self { name: name.into(), width, height, crop }
	}
}

/// Derivative-generation boundary of the host platform.
///
/// Sizes are installed once per resolved size after resolution;
/// `generate` produces derivative files for one original and reports
/// what it wrote. The pipeline never persists metadata itself.
#[async_trait]
pub trait ImagePipeline: Debug + Send + Sync {
	/// Install or replace a size registration
	async fn register_size(&self, spec: SizeSpec) -> MsResult<()>;

	/// Generate derivatives of one original file for all registered sizes.
	///
	/// An error or empty result means no derivative metadata may be
	/// persisted for the item.
	async fn generate(&self, path: &Path) -> MsResult<DerivativeMeta>;
}

// vim: ts=4

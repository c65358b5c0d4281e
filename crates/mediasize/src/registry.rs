//! Size registry: host-reported names, theme registrations, and the
//! compiled-in defaults of the reserved platform sizes.
//!
//! The registry is mutable while the app is being built and frozen into
//! an immutable snapshot before first use. Resolution only ever sees the
//! frozen snapshot, so nothing downstream depends on registration order
//! or on process-wide mutable state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mediasize_types::prelude::*;

/// Platform-native sizes with compiled-in defaults
pub const RESERVED_SIZES: &[&str] = &["thumbnail", "medium", "medium_large", "large"];

/// Sizes whose dimensions the host platform's own settings UI manages.
/// Deactivation must never touch their width/height settings.
pub const HOST_OWNED_SIZES: &[&str] = &["thumbnail", "medium", "large"];

/// Resolved value of one size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeValue {
	/// 0 = unconstrained
	pub width: u32,
	/// 0 = unconstrained
	pub height: u32,
	pub crop: CropMode,
}

impl SizeValue {
	pub fn new(width: u32, height: u32, crop: CropMode) -> Self {
		Self { width, height, crop }
	}
}

/// Compiled-in default of a reserved size
pub fn reserved_default(name: &str) -> Option<SizeValue> {
	match name {
		"thumbnail" => Some(SizeValue::new(150, 150, CropMode::Centered)),
		"medium" => Some(SizeValue::new(300, 300, CropMode::Disabled)),
		"medium_large" => Some(SizeValue::new(768, 0, CropMode::Disabled)),
		"large" => Some(SizeValue::new(1024, 1024, CropMode::Disabled)),
		_ => None,
	}
}

pub fn is_reserved(name: &str) -> bool {
	RESERVED_SIZES.contains(&name)
}

pub fn is_host_owned(name: &str) -> bool {
	HOST_OWNED_SIZES.contains(&name)
}

/// Mutable registry used while the app is being built
pub struct SizeRegistry {
	reported: Vec<Box<str>>,
	additional: HashMap<Box<str>, SizeValue>,
}

impl SizeRegistry {
	pub fn new() -> Self {
		Self { reported: Vec::new(), additional: HashMap::new() }
	}

	/// Record a host-reported intermediate size (order preserving)
	pub fn report(&mut self, name: impl Into<Box<str>>) {
		let name = name.into();
		if !self.reported.contains(&name) {
			self.reported.push(name);
		}
	}

	/// Register an additional size with its defaults, and report it
	pub fn register_additional(
		&mut self,
		name: impl Into<Box<str>>,
		width: u32,
		height: u32,
		crop: CropMode,
	) {
		let name = name.into();
		debug!("Registering additional size: {} {}x{} crop={}", name, width, height, crop);
		self.additional.insert(name.clone(), SizeValue::new(width, height, crop));
		self.report(name);
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSizeRegistry {
		info!(
			"Freezing size registry: {} reported, {} additional",
			self.reported.len(),
			self.additional.len()
		);
		FrozenSizeRegistry { reported: self.reported, additional: self.additional }
	}

	pub fn len(&self) -> usize {
		self.reported.len()
	}

	pub fn is_empty(&self) -> bool {
		self.reported.is_empty()
	}
}

impl Default for SizeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry snapshot stored in AppState
#[derive(Debug)]
pub struct FrozenSizeRegistry {
	reported: Vec<Box<str>>,
	additional: HashMap<Box<str>, SizeValue>,
}

impl FrozenSizeRegistry {
	/// Host-reported size names, in reported order
	pub fn reported(&self) -> impl Iterator<Item = &str> {
		self.reported.iter().map(AsRef::as_ref)
	}

	/// Registration defaults of an additional size
	pub fn additional(&self, name: &str) -> Option<&SizeValue> {
		self.additional.get(name)
	}

	/// Whether this registry knows the size at all
	pub fn knows(&self, name: &str) -> bool {
		is_reserved(name) || self.additional.contains_key(name)
	}
}


// vim: ts=4

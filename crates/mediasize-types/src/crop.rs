//! Crop-mode model for image sizes.
//!
//! The persisted crop field is polymorphic: older installations stored a
//! boolean or `0`/`1`, the anchor selector stores a two-token position
//! string like `"left top"`. Normalization turns every stored form into
//! one closed [`CropMode`] so downstream code never sees the raw value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anchor position for cropped sizes.
///
/// Eight positions: the three columns crossed with the three rows, minus
/// the full center (which is [`CropMode::Centered`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropAnchor {
	LeftTop,
	CenterTop,
	RightTop,
	LeftCenter,
	RightCenter,
	LeftBottom,
	CenterBottom,
	RightBottom,
}

impl CropAnchor {
	/// All anchors, in selector display order
	pub const ALL: &'static [CropAnchor] = &[
		Self::LeftTop,
		Self::CenterTop,
		Self::RightTop,
		Self::LeftCenter,
		Self::RightCenter,
		Self::LeftBottom,
		Self::CenterBottom,
		Self::RightBottom,
	];

	/// Persisted two-token form, e.g. "left top"
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::LeftTop => "left top",
			Self::CenterTop => "center top",
			Self::RightTop => "right top",
			Self::LeftCenter => "left center",
			Self::RightCenter => "right center",
			Self::LeftBottom => "left bottom",
			Self::CenterBottom => "center bottom",
			Self::RightBottom => "right bottom",
		}
	}

	/// Parse from horizontal and vertical tokens
	pub fn from_tokens(x: &str, y: &str) -> Option<Self> {
		match (x, y) {
			("left", "top") => Some(Self::LeftTop),
			("center", "top") => Some(Self::CenterTop),
			("right", "top") => Some(Self::RightTop),
			("left", "center") => Some(Self::LeftCenter),
			("right", "center") => Some(Self::RightCenter),
			("left", "bottom") => Some(Self::LeftBottom),
			("center", "bottom") => Some(Self::CenterBottom),
			("right", "bottom") => Some(Self::RightBottom),
			_ => None,
		}
	}
}

impl fmt::Display for CropAnchor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Normalized crop behavior of one image size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CropMode {
	/// Proportional resize, no cropping
	#[default]
	Disabled,
	/// Crop to exact dimensions around the image center
	Centered,
	/// Crop to exact dimensions anchored at a position
	Anchored(CropAnchor),
}

impl CropMode {
	/// Normalize a persisted string form.
	///
	/// Total: every input maps to exactly one mode; unrecognized tokens
	/// fall back to `Disabled`. Idempotent over [`Self::as_setting_str`].
	pub fn parse(raw: &str) -> Self {
		let raw = raw.trim();
		match raw {
			"" | "0" => Self::Disabled,
			"1" => Self::Centered,
			_ => match raw.split_once(' ') {
				Some((x, y)) => CropAnchor::from_tokens(x.trim(), y.trim())
					.map_or(Self::Disabled, Self::Anchored),
				None => Self::Disabled,
			},
		}
	}

	/// Normalize a raw stored setting value (bool, number, or string)
	pub fn from_setting(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Bool(true) => Self::Centered,
			serde_json::Value::Number(n) if n.as_i64() == Some(1) => Self::Centered,
			serde_json::Value::String(s) => Self::parse(s),
			_ => Self::Disabled,
		}
	}

	/// Canonical persisted form: "0", "1", or the anchor tokens
	pub fn as_setting_str(&self) -> &'static str {
		match self {
			Self::Disabled => "0",
			Self::Centered => "1",
			Self::Anchored(anchor) => anchor.as_str(),
		}
	}

	/// Whether this size crops to exact dimensions
	pub fn is_enabled(&self) -> bool {
		!matches!(self, Self::Disabled)
	}
}

impl fmt::Display for CropMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_setting_str())
	}
}

impl Serialize for CropMode {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.as_setting_str())
	}
}

impl<'de> Deserialize<'de> for CropMode {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct CropVisitor;

		impl serde::de::Visitor<'_> for CropVisitor {
			type Value = CropMode;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a crop mode string, boolean, or 0/1")
			}

			fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
				Ok(if v { CropMode::Centered } else { CropMode::Disabled })
			}

			fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
				Ok(if v == 1 { CropMode::Centered } else { CropMode::Disabled })
			}

			fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
				Ok(if v == 1 { CropMode::Centered } else { CropMode::Disabled })
			}

			fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
				Ok(CropMode::parse(v))
			}
		}

		deserializer.deserialize_any(CropVisitor)
	}
}


// vim: ts=4

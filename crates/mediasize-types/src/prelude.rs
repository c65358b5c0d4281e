pub use crate::crop::{CropAnchor, CropMode};
pub use crate::error::{Error, MsResult};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4

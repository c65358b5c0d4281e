pub use crate::app::App;
pub use mediasize_types::crop::{CropAnchor, CropMode};
pub use mediasize_types::error::{Error, MsResult};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4

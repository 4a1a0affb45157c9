//! Prelude module for relfmt
//!
//! This module re-exports commonly used types and functions
//! to simplify imports across the codebase.
//!
//! # Usage
//!
//! ```rust
//! use relfmt_core::prelude::*;
//! ```

// Error handling
pub use crate::utils::error::{RelfmtError, RelfmtResult, ResultExt};

// Relative time
pub use crate::utils::locale::{TimeFormat, TimeOfDayFormat};
pub use crate::utils::time::{
    parse_timestamp, relative, relative_millis, Clock, FixedClock, RelativeTime,
    RelativeTimeFormatter, SystemClock,
};

// Colors
pub use crate::utils::color::{
    adjust_alpha, adjust_contrast, adjust_contrast_with, contrast, difference, highlight, is_dark,
    middle, relative_luminance, Rgba,
};

// Configuration
pub use crate::utils::config::Config;

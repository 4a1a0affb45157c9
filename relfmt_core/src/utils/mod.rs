//! Utility modules for relfmt
//!
//! Relative time formatting, color helpers, and the shared configuration,
//! error and logging plumbing.

pub mod calendar;
pub mod color;
pub mod config;
pub mod error;
pub mod locale;
pub mod logger;
pub mod time;

// Available exports via submodules:
// time::{relative, relative_millis, RelativeTimeFormatter, RelativeTime, Clock}
// color::{Rgba, highlight, middle, difference, contrast, adjust_contrast}
// error::{RelfmtError, RelfmtResult, ResultExt}

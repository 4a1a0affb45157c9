//! relfmt - human-readable relative timestamps and color helpers
//!
//! ```rust
//! use chrono::{Duration, Local};
//! use relfmt_core::prelude::*;
//!
//! assert_eq!(relative(&(Local::now() - Duration::seconds(10))), "now");
//!
//! let background: Rgba = "#808080".parse().unwrap();
//! let text = adjust_contrast("#858585".parse().unwrap(), background);
//! assert!(text.hsl_lightness() > background.hsl_lightness());
//! ```

pub mod prelude;
pub mod utils;

pub use prelude::*;
pub use utils::*;

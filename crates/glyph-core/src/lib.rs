//! Core types for bucket glyph and quantile dot-histogram geometry
//!
//! This crate holds what every other glyph crate shares: the unified
//! [`Error`] type and the numeric [`Domain`] that samples and heights are
//! normalized against.
//!
//! # Example
//!
//! ```rust
//! use glyph_core::{ticks_exact, Domain};
//!
//! let domain = Domain::new(0.0, 1000.0).unwrap();
//! assert_eq!(domain.normalize(250.0), 0.25);
//!
//! // Probabilities for a resolution-4 glyph
//! let ps = ticks_exact(0.0, 1.0, 5);
//! assert_eq!(ps, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

pub mod domain;
pub mod error;

pub use domain::{ticks_exact, Domain};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ticks_exact, Domain, Error, Result};
}

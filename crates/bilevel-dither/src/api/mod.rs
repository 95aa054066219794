//! Public API for the bilevel-dither crate.
//!
//! This module provides dispatch from method selectors to algorithm
//! configurations, the [`Ditherer`] builder, and the [`DitherError`]
//! error type.

mod builder;
mod error;
mod method;

pub use builder::{dither, dither_selector, Ditherer};
pub use error::{DitherError, Result};
pub use method::{ChannelMode, Method};

//! In-memory pixel representations.
//!
//! Two views are used and never mixed inside an algorithm:
//!
//! - [`PixelBuffer`]: packed 8-bit RGBA, row-major, top-left origin. This is
//!   the only form that crosses the crate boundary.
//! - [`Plane`]: one `f32` sample per pixel, used for computation. A buffer is
//!   split into one luma plane or three channel planes, dithered, and packed
//!   back into a new [`PixelBuffer`].

mod pixel_buffer;
mod plane;

pub use pixel_buffer::PixelBuffer;
pub use plane::Plane;

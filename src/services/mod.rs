pub mod dither_service;

pub use dither_service::{score, DitherOutcome, DitherService};

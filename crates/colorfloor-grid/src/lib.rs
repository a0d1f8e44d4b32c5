#![forbid(unsafe_code)]

//! Colorfloor grid kernel: cells, colors, and randomization.
//!
//! Everything in this crate is backend-free and synchronous. The grid is a
//! plain in-memory structure so the interaction layer and the tests can drive
//! it without a terminal attached.

pub mod cell;
pub mod grid;
pub mod rng;

pub use cell::PackedRgb;
pub use grid::{BACKGROUND, DEFAULT_SIZE, GridError, PixelGrid};
pub use rng::XorShift32;

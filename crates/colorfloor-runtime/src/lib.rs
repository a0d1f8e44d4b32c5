#![forbid(unsafe_code)]

//! Colorfloor runtime: commands, mode state, and the disco task.
//!
//! This crate owns everything between the raw input surface and the grid:
//! parsing the single-character command language, the drawing/disco state
//! machine, and the cancellable background task that animates disco mode.
//! The host surface is abstracted behind [`RenderSurface`], so the whole
//! layer is testable without a terminal.

pub mod animator;
pub mod command;
pub mod controller;
pub mod surface;

pub use animator::{DISCO_INTERVAL, DiscoAnimator, StopSignal};
pub use command::{Command, CommandError};
pub use controller::{DrawState, ModeController};
pub use surface::{CountingSurface, RenderSurface};

#![forbid(unsafe_code)]

//! The mode state machine.
//!
//! The controller owns the interaction state and is the only writer of it.
//! Commands move the state; pointer clicks read it to decide whether (and in
//! what color) to paint. Disco is delegated to the [`DiscoAnimator`], but the
//! disco *flag* lives here with the rest of the state.
//!
//! `drawing` and `disco` are independent flags: enabling paint while disco is
//! active leaves the animation running (each tick overwrites painted cells),
//! and disco alone never makes clicks paint.

use std::sync::{Arc, Mutex, PoisonError};

use colorfloor_grid::{PackedRgb, PixelGrid};

use crate::animator::DiscoAnimator;
use crate::command::{Command, CommandError};
use crate::surface::RenderSurface;

/// The controller's owned interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawState {
    /// Pointer clicks paint when set.
    pub drawing: bool,
    /// The disco animation is active.
    pub disco: bool,
    /// Color applied by the next painting click.
    pub color: PackedRgb,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            drawing: false,
            disco: false,
            color: PackedRgb::BLACK,
        }
    }
}

/// Interprets commands and pointer clicks against the shared grid.
pub struct ModeController {
    state: DrawState,
    grid: Arc<Mutex<PixelGrid>>,
    surface: Arc<dyn RenderSurface>,
    animator: DiscoAnimator,
    seed: u32,
}

impl ModeController {
    /// Create a controller over the shared grid and host surface.
    ///
    /// `seed` feeds the disco color stream; each disco start derives a fresh
    /// worker seed from it.
    pub fn new(grid: Arc<Mutex<PixelGrid>>, surface: Arc<dyn RenderSurface>, seed: u32) -> Self {
        Self::with_animator(grid, surface, seed, DiscoAnimator::new())
    }

    /// Create a controller with an explicit animator.
    ///
    /// Tests pass an animator with a short tick interval.
    pub fn with_animator(
        grid: Arc<Mutex<PixelGrid>>,
        surface: Arc<dyn RenderSurface>,
        seed: u32,
        animator: DiscoAnimator,
    ) -> Self {
        Self {
            state: DrawState::default(),
            grid,
            surface,
            animator,
            seed,
        }
    }

    /// Current interaction state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Whether the disco worker is currently running.
    pub fn is_disco_running(&self) -> bool {
        self.animator.is_running()
    }

    /// A handle to the shared grid.
    pub fn grid(&self) -> Arc<Mutex<PixelGrid>> {
        self.grid.clone()
    }

    /// Apply a submitted input line.
    ///
    /// On success the applied command is returned so the host can reflect the
    /// new mode. On parse failure the state is untouched and the error is
    /// returned for user-visible display.
    pub fn process_input(&mut self, input: &str) -> Result<Command, CommandError> {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(%err, "rejected input");
                return Err(err);
            }
        };

        match command {
            Command::Paint => {
                self.state.drawing = true;
                self.state.color = PackedRgb::BLACK;
            }
            Command::Erase => {
                self.state.drawing = true;
                self.state.color = PackedRgb::WHITE;
            }
            Command::Disco => {
                self.state.disco = true;
                let seed = self.next_disco_seed();
                self.animator
                    .start(self.grid.clone(), self.surface.clone(), seed);
            }
            Command::Stop => {
                self.state.drawing = false;
                self.state.disco = false;
                self.animator.stop();
            }
        }

        tracing::debug!(
            ?command,
            drawing = self.state.drawing,
            disco = self.state.disco,
            "mode change"
        );
        Ok(command)
    }

    /// Handle a pointer click on grid cell (row, col).
    ///
    /// No-op unless drawing is active; out-of-range coordinates are silently
    /// ignored. A successful paint requests a redraw.
    pub fn on_pointer_click(&mut self, row: u16, col: u16) {
        if !self.state.drawing {
            return;
        }

        let painted = {
            let mut grid = self.grid.lock().unwrap_or_else(PoisonError::into_inner);
            grid.set(row, col, self.state.color).is_ok()
        };
        if painted {
            tracing::trace!(row, col, color = ?self.state.color, "cell painted");
            self.surface.request_redraw();
        }
    }

    /// Stop background work. Called when the host shuts down.
    pub fn shutdown(&mut self) {
        self.animator.stop();
    }

    /// Derive a fresh worker seed so restarted disco runs differ.
    fn next_disco_seed(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(2654435761) | 1;
        self.seed
    }
}

#![forbid(unsafe_code)]

//! The disco animation task.
//!
//! Disco mode runs one background worker that repaints the whole grid with
//! random colors on every tick: randomize, request a redraw, then wait the
//! interval. The worker is cancellable through a condvar-backed stop signal,
//! so clearing disco is observed within one interval rather than one sleep.
//!
//! # Invariants
//!
//! - At most one worker runs at a time. A start request while a worker is
//!   running is ignored.
//! - `stop()` joins the worker and is idempotent.
//! - Cancellation latency is bounded by one tick interval.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use colorfloor_grid::{PixelGrid, XorShift32};

use crate::surface::RenderSurface;

/// Delay between disco repaints.
pub const DISCO_INTERVAL: Duration = Duration::from_millis(100);

/// Signal a worker checks to learn it should exit.
///
/// Cloneable so the owner can hand one to the worker thread while keeping
/// the trigger side for itself.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        (signal, StopTrigger { inner })
    }

    /// Check whether the stop has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Blocks on a
    /// condition variable, looping past spurious wakeups until the condition
    /// is met or the full duration has passed.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        if *stopped {
            return true;
        }

        let start = std::time::Instant::now();
        let mut remaining = duration;

        loop {
            let (guard, result) = match cvar.wait_timeout(stopped, remaining) {
                Ok(pair) => pair,
                Err(poisoned) => {
                    let (guard, result) = poisoned.into_inner();
                    (guard, result)
                }
            };
            stopped = guard;
            if *stopped {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

/// Trigger side of a [`StopSignal`] pair.
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        cvar.notify_all();
    }
}

/// Handle to a spawned disco worker.
struct RunningDisco {
    trigger: StopTrigger,
    thread: Option<JoinHandle<()>>,
}

impl RunningDisco {
    /// Signal the worker and join it.
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for RunningDisco {
    fn drop(&mut self) {
        self.trigger.stop();
        // No join in drop; `stop()` is the joining path.
    }
}

/// Owner of the single disco worker.
pub struct DiscoAnimator {
    interval: Duration,
    running: Option<RunningDisco>,
}

impl DiscoAnimator {
    /// Create an animator ticking at [`DISCO_INTERVAL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(DISCO_INTERVAL)
    }

    /// Create an animator with an explicit tick interval.
    ///
    /// Tests use short intervals to keep cancellation-latency checks fast.
    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            running: None,
        }
    }

    /// Whether a worker is currently running.
    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|r| !r.is_finished())
    }

    /// Start the disco worker.
    ///
    /// Ignored when a worker is already running (at-most-one invariant). A
    /// previous worker that has already exited is reaped first.
    pub fn start(
        &mut self,
        grid: Arc<Mutex<PixelGrid>>,
        surface: Arc<dyn RenderSurface>,
        seed: u32,
    ) {
        if self.is_running() {
            tracing::debug!("disco already running; start ignored");
            return;
        }
        if let Some(prev) = self.running.take() {
            prev.stop();
        }

        let (signal, trigger) = StopSignal::new();
        let interval = self.interval;
        let thread = thread::spawn(move || {
            let mut rng = XorShift32::new(seed);
            let mut ticks: u64 = 0;
            tracing::debug!(interval_ms = interval.as_millis() as u64, "disco started");
            loop {
                {
                    let mut grid = grid.lock().unwrap_or_else(PoisonError::into_inner);
                    grid.randomize_all(&mut rng);
                }
                surface.request_redraw();
                ticks += 1;
                if signal.wait_timeout(interval) {
                    break;
                }
            }
            tracing::debug!(ticks, "disco stopped");
        });

        self.running = Some(RunningDisco {
            trigger,
            thread: Some(thread),
        });
    }

    /// Stop the disco worker, joining it. Idempotent.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.stop();
        }
    }
}

impl Default for DiscoAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DiscoAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

#![forbid(unsafe_code)]

//! The event loop: keys become commands, clicks become painted cells.
//!
//! Redraw requests from the core (including the disco worker's ticks) arrive
//! over an mpsc channel whose sender is the frontend's [`RenderSurface`]
//! implementation. The loop drains that channel between terminal events, so
//! the screen follows grid state without the core ever touching the terminal.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use colorfloor_grid::{DEFAULT_SIZE, PixelGrid, XorShift32};
use colorfloor_runtime::{ModeController, RenderSurface};

use crate::term::{CELL_HEIGHT, CELL_WIDTH, Session};

/// How long the loop waits for a terminal event before checking for redraws.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Sends redraw requests into the event loop's channel.
struct ChannelSurface(Sender<()>);

impl RenderSurface for ChannelSurface {
    fn request_redraw(&self) {
        // The loop only cares that at least one request is pending; a
        // hung-up receiver during shutdown is fine to ignore.
        let _ = self.0.send(());
    }
}

/// Run the interactive session until the user exits.
pub fn run() -> io::Result<()> {
    let grid = Arc::new(Mutex::new(PixelGrid::new(DEFAULT_SIZE)));
    let (redraw_tx, redraw_rx) = mpsc::channel();
    let surface = Arc::new(ChannelSurface(redraw_tx));
    let seed = XorShift32::from_entropy().next_u32();
    let mut controller = ModeController::new(grid.clone(), surface, seed);
    tracing::info!(size = DEFAULT_SIZE, "session starting");

    let mut session = Session::acquire()?;
    let mut input = String::new();
    let mut notice: Option<String> = None;
    let mut dirty = true;

    loop {
        if drain(&redraw_rx) || dirty {
            let state = controller.state();
            let grid = grid.lock().unwrap_or_else(PoisonError::into_inner);
            session.draw(&grid, state, &input, notice.as_deref())?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if !handle_key(key, &mut controller, &mut input, &mut notice) {
                    break;
                }
                dirty = true;
            }
            Event::Mouse(mouse) => handle_mouse(mouse, &mut controller),
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }

    controller.shutdown();
    tracing::info!("session ended");
    Ok(())
}

/// Apply one key event. Returns `false` when the app should exit.
fn handle_key(
    key: KeyEvent,
    controller: &mut ModeController,
    input: &mut String,
    notice: &mut Option<String>,
) -> bool {
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char(c) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => {
            let submitted = std::mem::take(input);
            *notice = match controller.process_input(&submitted) {
                Ok(_) => None,
                Err(err) => Some(err.to_string()),
            };
        }
        _ => {}
    }
    true
}

/// Translate a left click to grid coordinates and hand it to the controller.
///
/// Clicks outside the grid area land on out-of-range coordinates, which the
/// controller ignores silently.
fn handle_mouse(mouse: MouseEvent, controller: &mut ModeController) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let row = mouse.row / CELL_HEIGHT;
    let col = mouse.column / CELL_WIDTH;
    controller.on_pointer_click(row, col);
}

/// Drain queued redraw requests; true if any arrived.
fn drain(rx: &Receiver<()>) -> bool {
    let mut any = false;
    while rx.try_recv().is_ok() {
        any = true;
    }
    any
}

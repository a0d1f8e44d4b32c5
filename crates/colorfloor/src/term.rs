#![forbid(unsafe_code)]

//! Terminal session and grid painting.
//!
//! One grid cell occupies [`CELL_WIDTH`] columns by [`CELL_HEIGHT`] rows, so
//! cells come out roughly square on typical terminal fonts. The painter draws
//! each cell as background-colored blanks and keeps one status row below the
//! grid for the mode, the input line, and the last error.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use colorfloor_grid::{PackedRgb, PixelGrid};
use colorfloor_runtime::DrawState;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 2;
/// Terminal rows per grid cell.
pub const CELL_HEIGHT: u16 = 1;

/// Raw-mode terminal session, restored on drop.
///
/// Dropping the session leaves the alternate screen, releases mouse capture,
/// and disables raw mode, including on error paths out of the event loop.
pub struct Session {
    out: Stdout,
}

impl Session {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn acquire() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { out })
    }

    /// Draw the full grid plus the status line.
    pub fn draw(
        &mut self,
        grid: &PixelGrid,
        state: DrawState,
        input: &str,
        notice: Option<&str>,
    ) -> io::Result<()> {
        for row in 0..grid.size() {
            queue!(self.out, MoveTo(0, row * CELL_HEIGHT))?;
            for &color in grid.row(row) {
                queue!(
                    self.out,
                    SetBackgroundColor(to_term_color(color)),
                    Print("  ")
                )?;
            }
        }

        let status_row = grid.size() * CELL_HEIGHT;
        queue!(
            self.out,
            ResetColor,
            MoveTo(0, status_row),
            Clear(ClearType::CurrentLine),
            Print(status_line(state, input, notice))
        )?;
        self.out.flush()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Compose the status row: `[mode] > input  (notice)`.
fn status_line(state: DrawState, input: &str, notice: Option<&str>) -> String {
    let mode = mode_label(state);
    match notice {
        Some(notice) => format!("[{mode}] > {input}  ({notice})"),
        None => format!("[{mode}] > {input}"),
    }
}

/// Short status label for the active mode.
fn mode_label(state: DrawState) -> &'static str {
    let pen = if state.color == PackedRgb::WHITE {
        "erase"
    } else {
        "paint"
    };
    match (state.drawing, state.disco) {
        (false, false) => "idle",
        (false, true) => "disco",
        (true, false) => pen,
        (true, true) => {
            if state.color == PackedRgb::WHITE {
                "erase+disco"
            } else {
                "paint+disco"
            }
        }
    }
}

fn to_term_color(color: PackedRgb) -> Color {
    Color::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}

#[cfg(test)]
mod tests {
    use super::{mode_label, status_line, to_term_color};
    use colorfloor_grid::PackedRgb;
    use colorfloor_runtime::DrawState;
    use crossterm::style::Color;

    fn state(drawing: bool, disco: bool, color: PackedRgb) -> DrawState {
        DrawState {
            drawing,
            disco,
            color,
        }
    }

    #[test]
    fn mode_labels_cover_all_flag_combinations() {
        assert_eq!(mode_label(state(false, false, PackedRgb::BLACK)), "idle");
        assert_eq!(mode_label(state(false, true, PackedRgb::BLACK)), "disco");
        assert_eq!(mode_label(state(true, false, PackedRgb::BLACK)), "paint");
        assert_eq!(mode_label(state(true, false, PackedRgb::WHITE)), "erase");
        assert_eq!(
            mode_label(state(true, true, PackedRgb::BLACK)),
            "paint+disco"
        );
        assert_eq!(
            mode_label(state(true, true, PackedRgb::WHITE)),
            "erase+disco"
        );
    }

    #[test]
    fn status_line_shows_input_and_notice() {
        let s = state(true, false, PackedRgb::BLACK);
        assert_eq!(status_line(s, "p", None), "[paint] > p");
        assert_eq!(
            status_line(s, "", Some("invalid input \"x\": use 'p', 'e', 'd', or 's'")),
            "[paint] >   (invalid input \"x\": use 'p', 'e', 'd', or 's')"
        );
    }

    #[test]
    fn packed_rgb_maps_to_term_rgb() {
        assert_eq!(
            to_term_color(PackedRgb::rgb(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}

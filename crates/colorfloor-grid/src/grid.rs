#![forbid(unsafe_code)]

//! Grid storage.
//!
//! The [`PixelGrid`] is a square 2-D grid of colored cells, the floor the
//! user paints on. It provides bounds-checked cell access and the two bulk
//! sweeps the interaction modes need (reset, full randomization).
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = row * size + col`.
//!
//! # Invariants
//!
//! 1. `cells.len() == size * size`
//! 2. `size` never changes after creation
//! 3. Every cell always holds a valid color (see [`PackedRgb`])

use crate::cell::PackedRgb;
use crate::rng::XorShift32;

/// Default floor edge length, in cells.
pub const DEFAULT_SIZE: u16 = 30;

/// Color every cell starts with, and returns to on [`PixelGrid::reset`].
pub const BACKGROUND: PackedRgb = PackedRgb::WHITE;

/// Error for cell access outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column lies outside `[0, size)`.
    OutOfRange { row: u16, col: u16, size: u16 },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { row, col, size } => {
                write!(f, "cell ({row}, {col}) is outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square grid of colored cells.
///
/// # Example
///
/// ```
/// use colorfloor_grid::{PackedRgb, PixelGrid};
///
/// let mut grid = PixelGrid::new(3);
/// grid.set(1, 1, PackedRgb::BLACK).unwrap();
/// assert_eq!(grid.get(1, 1).unwrap(), PackedRgb::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    size: u16,
    cells: Vec<PackedRgb>,
}

impl PixelGrid {
    /// Create a new grid with every cell set to [`BACKGROUND`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn new(size: u16) -> Self {
        assert!(size > 0, "grid size must be > 0");
        let cells = vec![BACKGROUND; size as usize * size as usize];
        Self { size, cells }
    }

    /// Edge length in cells.
    #[inline]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid is empty (never true for a constructed grid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-throwing bounds check.
    #[inline]
    pub const fn contains(&self, row: u16, col: u16) -> bool {
        row < self.size && col < self.size
    }

    /// Convert (row, col) to a linear index, or `None` when out of bounds.
    #[inline]
    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if self.contains(row, col) {
            Some(row as usize * self.size as usize + col as usize)
        } else {
            None
        }
    }

    /// Read the cell at (row, col). No side effects.
    #[inline]
    pub fn get(&self, row: u16, col: u16) -> Result<PackedRgb, GridError> {
        match self.index(row, col) {
            Some(i) => Ok(self.cells[i]),
            None => Err(GridError::OutOfRange {
                row,
                col,
                size: self.size,
            }),
        }
    }

    /// Overwrite the cell at (row, col) in place.
    ///
    /// Triggers no redraw; presenting the change is the caller's business.
    #[inline]
    pub fn set(&mut self, row: u16, col: u16, color: PackedRgb) -> Result<(), GridError> {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = color;
                Ok(())
            }
            None => Err(GridError::OutOfRange {
                row,
                col,
                size: self.size,
            }),
        }
    }

    /// Set every cell back to [`BACKGROUND`].
    pub fn reset(&mut self) {
        self.cells.fill(BACKGROUND);
    }

    /// Overwrite every cell with an independently drawn random color.
    ///
    /// Mutates in place with no reallocation, so it is safe to call at
    /// animation-frame rate.
    pub fn randomize_all(&mut self, rng: &mut XorShift32) {
        for cell in &mut self.cells {
            *cell = rng.next_color();
        }
    }

    /// Raw access to the cell slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[PackedRgb] {
        &self.cells
    }

    /// The cells of a single row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[inline]
    pub fn row(&self, row: u16) -> &[PackedRgb] {
        let start = row as usize * self.size as usize;
        &self.cells[start..start + self.size as usize]
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::{BACKGROUND, DEFAULT_SIZE, GridError, PixelGrid};
    use crate::cell::PackedRgb;
    use crate::rng::XorShift32;

    #[test]
    fn new_grid_is_all_background() {
        let grid = PixelGrid::new(4);
        assert_eq!(grid.len(), 16);
        assert!(grid.cells().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn default_uses_default_size() {
        let grid = PixelGrid::default();
        assert_eq!(grid.size(), DEFAULT_SIZE);
        assert_eq!(grid.len(), DEFAULT_SIZE as usize * DEFAULT_SIZE as usize);
    }

    #[test]
    #[should_panic(expected = "grid size must be > 0")]
    fn zero_size_panics() {
        let _ = PixelGrid::new(0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = PixelGrid::new(3);
        let color = PackedRgb::rgb(12, 34, 56);
        grid.set(2, 1, color).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), color);
    }

    #[test]
    fn get_out_of_range_fails() {
        let grid = PixelGrid::new(3);
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfRange {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(u16::MAX, u16::MAX).is_err());
    }

    #[test]
    fn set_out_of_range_fails_and_mutates_nothing() {
        let mut grid = PixelGrid::new(3);
        let before = grid.cells().to_vec();
        assert!(grid.set(0, 3, PackedRgb::BLACK).is_err());
        assert!(grid.set(3, 0, PackedRgb::BLACK).is_err());
        assert_eq!(grid.cells(), &before[..]);
    }

    #[test]
    fn contains_matches_bounds() {
        let grid = PixelGrid::new(3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(2, 2));
        assert!(!grid.contains(3, 2));
        assert!(!grid.contains(2, 3));
    }

    #[test]
    fn reset_restores_background() {
        let mut grid = PixelGrid::new(3);
        let mut rng = XorShift32::new(7);
        grid.randomize_all(&mut rng);
        grid.reset();
        assert!(grid.cells().iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn randomize_all_stays_in_range() {
        let mut grid = PixelGrid::new(5);
        let mut rng = XorShift32::new(99);
        for _ in 0..10 {
            grid.randomize_all(&mut rng);
            assert!(grid.cells().iter().all(|c| c.raw() <= PackedRgb::MAX));
        }
    }

    #[test]
    fn randomize_all_touches_every_cell() {
        // White never comes out of a fresh 24-bit draw sweep on this seed,
        // so a cell left at BACKGROUND would mean the sweep skipped it.
        let mut grid = PixelGrid::new(8);
        let mut rng = XorShift32::new(3);
        grid.randomize_all(&mut rng);
        assert!(grid.cells().iter().all(|&c| c != BACKGROUND));
    }

    #[test]
    fn randomize_all_is_deterministic_per_seed() {
        let mut a = PixelGrid::new(4);
        let mut b = PixelGrid::new(4);
        a.randomize_all(&mut XorShift32::new(11));
        b.randomize_all(&mut XorShift32::new(11));
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn row_returns_the_right_slice() {
        let mut grid = PixelGrid::new(3);
        grid.set(1, 0, PackedRgb::BLACK).unwrap();
        grid.set(1, 2, PackedRgb::rgb(1, 2, 3)).unwrap();
        assert_eq!(
            grid.row(1),
            &[PackedRgb::BLACK, BACKGROUND, PackedRgb::rgb(1, 2, 3)]
        );
    }

    #[test]
    fn grid_error_display_names_the_cell() {
        let err = GridError::OutOfRange {
            row: 5,
            col: 7,
            size: 3,
        };
        assert_eq!(err.to_string(), "cell (5, 7) is outside the 3x3 grid");
    }
}

#[cfg(test)]
mod grid_proptests {
    use super::{BACKGROUND, PixelGrid};
    use crate::cell::PackedRgb;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn set_get_round_trip_in_bounds(
            tuple in (1u16..32, any::<u32>()).prop_flat_map(|(size, raw)| {
                (Just(size), 0..size, 0..size, Just(raw))
            }),
        ) {
            let (size, row, col, raw) = tuple;
            let mut grid = PixelGrid::new(size);
            let color = PackedRgb::from_raw(raw);
            grid.set(row, col, color).unwrap();
            prop_assert_eq!(grid.get(row, col).unwrap(), color);
        }

        #[test]
        fn out_of_bounds_never_mutates(
            tuple in (1u16..16, 0u16..64, 0u16..64, any::<u32>()),
        ) {
            let (size, row, col, raw) = tuple;
            prop_assume!(row >= size || col >= size);
            let mut grid = PixelGrid::new(size);
            let before = grid.cells().to_vec();
            prop_assert!(grid.get(row, col).is_err());
            prop_assert!(grid.set(row, col, PackedRgb::from_raw(raw)).is_err());
            prop_assert_eq!(grid.cells(), &before[..]);
        }

        #[test]
        fn reset_always_restores_background(seed in any::<u32>()) {
            let mut grid = PixelGrid::new(6);
            grid.randomize_all(&mut crate::rng::XorShift32::new(seed));
            grid.reset();
            prop_assert!(grid.cells().iter().all(|&c| c == BACKGROUND));
        }
    }
}

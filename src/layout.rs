//! Serpentine wiring map for square WS2812 panels.
//!
//! Cheap panels are wired as one continuous strip that snakes through the
//! grid: even rows run left to right, odd rows right to left. On the panels
//! this crate targets the data line additionally enters at the far end of
//! the snake, so the run is numbered from the last physical LED back to the
//! first.

/// Maps `(row, column)` coordinates to linear LED indices on a square
/// serpentine panel of side `SIDE`.
///
/// The mapping is a fixed property of the physical wiring: even rows are
/// wired left to right, odd rows right to left, and the whole run is
/// numbered in reverse. It is a bijection onto `0..SIDE * SIDE` — every
/// linear index is produced by exactly one coordinate pair.
///
/// Rows and columns are numbered from 0 at the top-left corner.
///
/// # Example
///
/// ```
/// use ws2812_panel::layout::Serpentine;
///
/// // 5×5 panel: row 0 runs left-to-right over the reversed numbering.
/// assert_eq!(Serpentine::<5>::index(0, 0), Some(24));
/// assert_eq!(Serpentine::<5>::index(0, 4), Some(20));
/// // Row 1 is wired right-to-left.
/// assert_eq!(Serpentine::<5>::index(1, 0), Some(15));
/// assert_eq!(Serpentine::<5>::index(4, 4), Some(0));
/// // Off-panel coordinates are rejected.
/// assert_eq!(Serpentine::<5>::index(5, 0), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Serpentine<const SIDE: usize>;

impl<const SIDE: usize> Serpentine<SIDE> {
    /// Total number of LEDs on the panel.
    pub const LEN: usize = SIDE * SIDE;

    /// Linear LED index for `(row, column)`, or `None` outside the panel.
    ///
    /// Usable in const contexts, so wiring tables can be checked at compile
    /// time.
    #[must_use]
    pub const fn index(row: usize, column: usize) -> Option<usize> {
        if row >= SIDE || column >= SIDE {
            return None;
        }
        // Odd rows are wired right to left.
        let run_column = if row % 2 == 0 {
            column
        } else {
            SIDE - 1 - column
        };
        Some(Self::LEN - 1 - (row * SIDE + run_column))
    }
}

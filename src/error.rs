//! Crate-wide error and result types.

use derive_more::{Display, Error};

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by panel devices.
///
/// Wire-level protocol or timing violations are deliberately absent: the
/// WS2812 protocol is unidirectional with no acknowledgement or checksum, so
/// a timing fault has no representation here — it shows up only as wrong
/// colors on the panel.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq, defmt::Format)]
#[non_exhaustive]
pub enum Error {
    /// No free PIO state machine on the primary or the secondary PIO
    /// instance. Fatal at initialization: the display can never produce
    /// output and there is no degraded mode, so startup must abort.
    #[display("no free PIO state machine on either PIO instance")]
    ResourceExhausted,

    /// A linear pixel index outside the panel's buffer.
    #[display("pixel index {index} out of range for a {len}-LED panel")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of LEDs on the panel.
        len: usize,
    },

    /// A (row, column) coordinate outside the panel.
    #[display("coordinate ({row}, {column}) outside a {side}x{side} panel")]
    CoordinateOutOfRange {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        column: usize,
        /// Side length of the square panel.
        side: usize,
    },
}

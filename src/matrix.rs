//! The addressable pixel state for a square serpentine WS2812 panel.

use smart_leds::RGB8;

use crate::engine::ByteSink;
use crate::layout::Serpentine;
use crate::{Error, Result};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Pixel state for a `SIDE`×`SIDE` WS2812 panel, flushed through a
/// [`ByteSink`].
///
/// The matrix owns its `N`-pixel buffer (`N` must equal `SIDE * SIDE`) and
/// the engine it flushes through. Mutations touch only the buffer; nothing
/// reaches the physical LEDs until [`flush`](Self::flush).
///
/// Colors are transmitted byte-for-byte as supplied — no scaling, no gamma
/// correction.
///
/// # Example
///
/// ```
/// use ws2812_panel::engine::ByteSink;
/// use ws2812_panel::matrix::{PixelMatrix, Rgb, colors};
///
/// struct Discard;
/// impl ByteSink for Discard {
///     fn emit_byte(&mut self, _byte: u8) {}
///     fn latch(&mut self) {}
/// }
///
/// let mut matrix = PixelMatrix::<_, 25, 5>::new(Discard);
/// matrix.set_at(2, 2, colors::RED)?;
/// matrix.set(0, Rgb::new(0, 0, 64))?;
/// matrix.flush();
/// # Ok::<(), ws2812_panel::Error>(())
/// ```
pub struct PixelMatrix<E, const N: usize, const SIDE: usize> {
    pixels: [Rgb; N],
    engine: E,
}

impl<E: ByteSink, const N: usize, const SIDE: usize> PixelMatrix<E, N, SIDE> {
    /// Number of LEDs on the panel.
    pub const LEN: usize = N;

    /// Side length of the square panel.
    pub const SIDE: usize = SIDE;

    /// Creates an all-dark matrix flushing through `engine`.
    ///
    /// # Panics
    ///
    /// When `N != SIDE * SIDE`.
    #[must_use]
    pub fn new(engine: E) -> Self {
        assert!(N == SIDE * SIDE, "N must equal SIDE * SIDE");
        Self {
            pixels: [Rgb::new(0, 0, 0); N],
            engine,
        }
    }

    /// Sets the pixel at a linear index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= N`. Other pixels are never
    /// affected.
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<()> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })?;
        *pixel = color;
        Ok(())
    }

    /// Reads back the pixel at a linear index.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= N`.
    pub fn pixel(&self, index: usize) -> Result<Rgb> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Sets the pixel at `(row, column)` through the serpentine wiring map.
    ///
    /// # Errors
    ///
    /// [`Error::CoordinateOutOfRange`] when the coordinate is off the panel.
    pub fn set_at(&mut self, row: usize, column: usize, color: Rgb) -> Result<()> {
        let index = Serpentine::<SIDE>::index(row, column).ok_or(Error::CoordinateOutOfRange {
            row,
            column,
            side: SIDE,
        })?;
        self.set(index, color)
    }

    /// Turns every pixel dark. No effect on the panel until
    /// [`flush`](Self::flush).
    pub fn clear(&mut self) {
        self.pixels = [Rgb::new(0, 0, 0); N];
    }

    /// Streams the whole buffer to the panel and latches it.
    ///
    /// Pixels go out in ascending index order, three bytes each in the GRB
    /// order the WS2812 family expects — the physical LEDs expect GRB
    /// regardless of the logical RGB API, so this order must not change.
    /// Exactly one latch follows the last byte.
    ///
    /// Blocking and deterministic: `N` × 3 byte times plus the latch idle.
    /// It must run to completion — a partially transmitted frame leaves the
    /// panel in an undefined visual state with no recovery short of
    /// re-flushing a full frame.
    pub fn flush(&mut self) {
        let Self { pixels, engine } = self;
        for pixel in pixels.iter() {
            engine.emit_byte(pixel.g);
            engine.emit_byte(pixel.r);
            engine.emit_byte(pixel.b);
        }
        engine.latch();
    }

    /// Shared access to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#![allow(missing_docs)]
//! Host-level tests for pixel buffer mutation and wire-order serialization,
//! using a recording double in place of the PIO engine.

use ws2812_panel::Error;
use ws2812_panel::engine::ByteSink;
use ws2812_panel::matrix::{PixelMatrix, Rgb};

/// Records every byte and every latch the matrix emits.
#[derive(Debug, Default)]
struct RecordingSink {
    bytes: Vec<u8>,
    /// Byte count at the moment of each latch.
    latches: Vec<usize>,
}

impl ByteSink for RecordingSink {
    fn emit_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn latch(&mut self) {
        self.latches.push(self.bytes.len());
    }
}

type Matrix5 = PixelMatrix<RecordingSink, 25, 5>;

fn matrix5() -> Matrix5 {
    Matrix5::new(RecordingSink::default())
}

#[test]
fn new_matrix_is_all_dark() {
    let matrix = matrix5();
    for index in 0..Matrix5::LEN {
        assert_eq!(matrix.pixel(index).unwrap(), Rgb::new(0, 0, 0));
    }
}

#[test]
fn set_then_read_back_does_not_alias_other_pixels() {
    let mut matrix = matrix5();
    matrix.set(7, Rgb::new(1, 2, 3)).unwrap();
    for index in 0..Matrix5::LEN {
        let expected = if index == 7 {
            Rgb::new(1, 2, 3)
        } else {
            Rgb::new(0, 0, 0)
        };
        assert_eq!(matrix.pixel(index).unwrap(), expected);
    }
}

#[test]
fn out_of_range_index_is_a_checked_error() {
    let mut matrix = matrix5();
    assert_eq!(
        matrix.set(25, Rgb::new(1, 1, 1)),
        Err(Error::IndexOutOfRange { index: 25, len: 25 })
    );
    assert_eq!(
        matrix.pixel(usize::MAX),
        Err(Error::IndexOutOfRange {
            index: usize::MAX,
            len: 25
        })
    );
}

#[test]
fn off_panel_coordinate_is_a_checked_error() {
    let mut matrix = matrix5();
    assert_eq!(
        matrix.set_at(0, 5, Rgb::new(1, 1, 1)),
        Err(Error::CoordinateOutOfRange {
            row: 0,
            column: 5,
            side: 5
        })
    );
}

#[test]
fn clear_resets_every_pixel_without_touching_hardware() {
    let mut matrix = matrix5();
    for index in 0..Matrix5::LEN {
        matrix.set(index, Rgb::new(10, 20, 30)).unwrap();
    }
    matrix.clear();
    for index in 0..Matrix5::LEN {
        assert_eq!(matrix.pixel(index).unwrap(), Rgb::new(0, 0, 0));
    }
    assert!(matrix.engine().bytes.is_empty());
    assert!(matrix.engine().latches.is_empty());
}

#[test]
fn flush_emits_grb_triples_in_ascending_index_order() {
    let mut matrix = matrix5();
    for index in 0..Matrix5::LEN {
        let base = index as u8;
        matrix
            .set(index, Rgb::new(base, base.wrapping_add(100), base.wrapping_add(200)))
            .unwrap();
    }
    matrix.flush();

    let bytes = &matrix.engine().bytes;
    assert_eq!(bytes.len(), 3 * Matrix5::LEN);
    for index in 0..Matrix5::LEN {
        let base = index as u8;
        assert_eq!(
            bytes[index * 3..index * 3 + 3],
            // Wire order is G, R, B.
            [base.wrapping_add(100), base, base.wrapping_add(200)]
        );
    }
}

#[test]
fn flush_latches_exactly_once_even_for_an_all_dark_frame() {
    let mut matrix = matrix5();
    matrix.flush();
    assert_eq!(matrix.engine().bytes, vec![0; 75]);
    assert_eq!(matrix.engine().latches, [75]);

    matrix.flush();
    assert_eq!(matrix.engine().latches, [75, 150]);
}

#[test]
fn all_green_frame_serializes_as_g255_r0_b0_per_led() {
    let mut matrix = matrix5();
    for row in 0..5 {
        for column in 0..5 {
            matrix.set_at(row, column, Rgb::new(0, 255, 0)).unwrap();
        }
    }
    matrix.flush();

    let expected: Vec<u8> = [255, 0, 0].repeat(25);
    assert_eq!(matrix.engine().bytes, expected);
    assert_eq!(matrix.engine().latches, [75]);
}

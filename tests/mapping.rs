#![allow(missing_docs)]
//! Host-level tests for the serpentine coordinate mapping.

use ws2812_panel::layout::Serpentine;

#[test]
fn five_by_five_fixed_points_match_wiring() {
    assert_eq!(Serpentine::<5>::index(0, 0), Some(24));
    assert_eq!(Serpentine::<5>::index(0, 4), Some(20));
    assert_eq!(Serpentine::<5>::index(1, 0), Some(15));
    assert_eq!(Serpentine::<5>::index(4, 4), Some(0));
}

#[test]
fn even_rows_run_left_to_right_over_the_reversed_numbering() {
    let row0: Vec<_> = (0..5)
        .map(|column| Serpentine::<5>::index(0, column).unwrap())
        .collect();
    assert_eq!(row0, [24, 23, 22, 21, 20]);
}

#[test]
fn odd_rows_run_right_to_left() {
    let row1: Vec<_> = (0..5)
        .map(|column| Serpentine::<5>::index(1, column).unwrap())
        .collect();
    assert_eq!(row1, [15, 16, 17, 18, 19]);
}

fn assert_bijection<const SIDE: usize>() {
    let mut seen = vec![false; SIDE * SIDE];
    for row in 0..SIDE {
        for column in 0..SIDE {
            let index = Serpentine::<SIDE>::index(row, column)
                .unwrap_or_else(|| panic!("({row}, {column}) rejected on a {SIDE}x{SIDE} panel"));
            assert!(index < SIDE * SIDE, "index {index} out of range");
            assert!(!seen[index], "index {index} produced twice");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|&hit| hit), "some index never produced");
}

#[test]
fn mapping_is_a_bijection_for_small_panels() {
    assert_bijection::<1>();
    assert_bijection::<2>();
    assert_bijection::<3>();
    assert_bijection::<4>();
    assert_bijection::<5>();
    assert_bijection::<8>();
}

#[test]
fn off_panel_coordinates_are_rejected() {
    assert_eq!(Serpentine::<5>::index(5, 0), None);
    assert_eq!(Serpentine::<5>::index(0, 5), None);
    assert_eq!(Serpentine::<5>::index(usize::MAX, usize::MAX), None);
}

#[test]
fn mapping_is_usable_in_const_context() {
    const CENTER: Option<usize> = Serpentine::<5>::index(2, 2);
    assert_eq!(CENTER, Some(12));
}

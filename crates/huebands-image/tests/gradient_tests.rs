//! Integration tests for gradient synthesis.

use huebands_image::gradient::{pixel_color, pixel_hsv, synthesize};
use huebands_image::{Dimensions, Rgb};

#[test]
fn test_first_column_parameters() {
    for columns in [1, 2, 7, 640] {
        for row in 0..12 {
            let hsv = pixel_hsv(columns, row, 0);
            assert!((hsv.saturation - 0.5).abs() < f64::EPSILON);
            assert!((hsv.value - 1.0).abs() < f64::EPSILON);
            assert_eq!(hsv.max_channel(), 255);
            assert_eq!(hsv.min_channel(), 128);
        }
    }
}

#[test]
fn test_last_column_parameters() {
    let hsv = pixel_hsv(9, 0, 8);
    assert!((hsv.saturation - 1.0).abs() < f64::EPSILON);
    assert!((hsv.value - 0.5).abs() < f64::EPSILON);
    assert_eq!(hsv.max_channel(), 128);
    assert_eq!(hsv.min_channel(), 0);
}

#[test]
fn test_hue_follows_row() {
    assert_eq!(pixel_hsv(4, 13, 2).hue, 13);
}

#[test]
fn test_row_ramp_values() {
    let row: Vec<Rgb> = (0..5).map(|col| pixel_color(5, 0, col)).collect();
    assert_eq!(
        row,
        vec![
            Rgb::new(255, 128, 128),
            Rgb::new(223, 84, 84),
            Rgb::new(191, 48, 48),
            Rgb::new(159, 20, 20),
            Rgb::new(128, 0, 0),
        ]
    );
}

#[test]
fn test_green_band_ramp() {
    assert_eq!(pixel_color(3, 1, 1), Rgb::new(48, 191, 48));
    assert_eq!(pixel_color(3, 2, 2), Rgb::new(0, 128, 0));
}

#[test]
fn test_rows_repeat_every_six() {
    let buffer = synthesize(Dimensions::new(11, 20)).unwrap();
    for row in 0..14 {
        for col in 0..11 {
            assert_eq!(buffer.pixel(row, col), buffer.pixel(row + 6, col));
        }
    }
}

#[test]
fn test_synthesize_row_major_layout() {
    let buffer = synthesize(Dimensions::new(2, 4)).unwrap();
    assert_eq!(
        buffer.as_bytes(),
        &[
            255, 128, 128, 128, 0, 0, // row 0: red
            128, 255, 128, 0, 128, 0, // row 1: green
            128, 255, 128, 0, 128, 0, // row 2: green
            128, 128, 255, 0, 0, 128, // row 3: blue
        ]
    );
}

#[test]
fn test_synthesize_single_column() {
    let buffer = synthesize(Dimensions::new(1, 6)).unwrap();
    assert_eq!(buffer.as_bytes().len(), 18);
    assert_eq!(buffer.pixel(0, 0), Some(Rgb::new(255, 128, 128)));
    assert_eq!(buffer.pixel(4, 0), Some(Rgb::new(128, 128, 255)));
}

#[test]
fn test_synthesize_empty() {
    assert!(synthesize(Dimensions::new(0, 3)).unwrap().as_bytes().is_empty());
    assert!(synthesize(Dimensions::new(3, 0)).unwrap().as_bytes().is_empty());
}

#[test]
fn test_max_never_below_min_across_row() {
    for col in 0..100 {
        let hsv = pixel_hsv(100, 0, col);
        assert!(hsv.max_channel() >= hsv.min_channel());
    }
}

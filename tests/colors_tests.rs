//! Integration tests for colors module

use pixel_transition::colors::{self, FALLBACK_COLOR, NamedColor, Palette, PaletteError};
use pixel_transition::{BLUE, Color, GREEN, RED, WHITE, YELLOW};

fn colors_close(a: Color, b: Color) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}

#[test]
fn hsv_creates_primary_colors() {
    assert!(colors_close(colors::hsv(0.0, 1.0, 1.0), RED));
    assert!(colors_close(colors::hsv(120.0, 1.0, 1.0), GREEN));
    assert!(colors_close(colors::hsv(240.0, 1.0, 1.0), BLUE));
}

#[test]
fn hsv_handles_saturation_and_value() {
    // Zero saturation is gray
    let gray = colors::hsv(0.0, 0.0, 0.5);
    assert_eq!(gray.red, gray.green);
    assert_eq!(gray.green, gray.blue);
    assert!(gray.red.abs_diff(128) <= 1);

    // Zero value is black
    assert_eq!(colors::hsv(0.0, 1.0, 0.0), Color::new(0, 0, 0));
}

#[test]
fn hue_creates_fully_saturated_colors() {
    assert!(colors_close(colors::hue(0.0), RED));
    assert!(colors_close(colors::hue(180.0), Color::new(0, 255, 255)));
    assert!(colors_close(colors::hue(360.0), colors::hue(0.0)));
}

#[test]
fn default_clock_palette_order() {
    let palette = Palette::<8>::default_clock().unwrap();
    let names: heapless::Vec<&str, 8> = palette.iter().map(|entry| entry.name).collect();

    assert_eq!(&names[..], &["YELLOW", "RED", "GREEN", "BLUE", "WHITE"]);
    assert_eq!(palette.color_or_fallback(0), YELLOW);
    assert_eq!(palette.color_or_fallback(4), WHITE);
}

#[test]
fn out_of_range_lookup_falls_back() {
    let palette = Palette::<8>::default_clock().unwrap();
    assert!(palette.get(5).is_none());
    assert_eq!(palette.color_or_fallback(5), FALLBACK_COLOR);

    let empty = Palette::<8>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.color_or_fallback(0), FALLBACK_COLOR);
}

#[test]
fn palette_capacity_is_enforced() {
    assert_eq!(
        Palette::<4>::default_clock(),
        Err(PaletteError::CapacityExceeded)
    );

    let mut palette = Palette::<1>::new();
    palette.push(NamedColor::new("A", RED)).unwrap();
    assert_eq!(
        palette.push(NamedColor::new("B", BLUE)),
        Err(PaletteError::CapacityExceeded)
    );
    assert_eq!(palette.len(), 1);
}

#[test]
fn duplicate_names_are_allowed() {
    let palette = Palette::<4>::from_slice(&[
        NamedColor::new("WARM", RED),
        NamedColor::new("WARM", YELLOW),
    ])
    .unwrap();

    assert_eq!(palette.len(), 2);
    assert_eq!(palette.color_or_fallback(1), YELLOW);
}

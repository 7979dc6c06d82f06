//! Colors.

/// An RGBA color with channels in the range `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const RED: Color = Color::rgb(1., 0., 0.);
    pub const GREEN: Color = Color::rgb(0., 1., 0.);
    pub const BLUE: Color = Color::rgb(0., 0., 1.);

    /// Creates an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1. }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Color {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.;
        Color::rgb(channel(16), channel(8), channel(0))
    }
}

#[test]
fn test_color_from_hex() {
    let color = Color::from_hex(0xff8000);
    assert_eq!(color.r, 1.);
    assert!((color.g - 128. / 255.).abs() < 1e-9, "green channel should be 0x80");
    assert_eq!(color.b, 0.);
    assert_eq!(color.a, 1., "hex colors are opaque");
    assert_eq!(Color::from_hex(0x0000ff), Color::BLUE);
}

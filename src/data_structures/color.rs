//! 8-bit RGBA colors and the named colors used by the shared tables.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const ORANGE: Color = Color::rgb(0xFF, 0xA5, 0x00);
    pub const ORANGE_RED: Color = Color::rgb(0xFF, 0x45, 0x00);
    pub const BLUE_VIOLET: Color = Color::rgb(0x8A, 0x2B, 0xE2);
    pub const FUCHSIA: Color = Color::rgb(0xFF, 0x00, 0xFF);
    pub const SLATE_GRAY: Color = Color::rgb(0x70, 0x80, 0x90);
    pub const GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const BURLY_WOOD: Color = Color::rgb(0xDE, 0xB8, 0x87);
    pub const CYAN: Color = Color::rgb(0x00, 0xFF, 0xFF);
    pub const DARK_GREEN: Color = Color::rgb(0x00, 0x64, 0x00);
    pub const FIREBRICK: Color = Color::rgb(0xB2, 0x22, 0x22);
    pub const LIGHT_YELLOW: Color = Color::rgb(0xFF, 0xFF, 0xE0);
    pub const SNOW: Color = Color::rgb(0xFF, 0xFA, 0xFA);

    /// Opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels scaled to `0.0..=1.0` without any transfer function applied.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Converts the sRGB channels to linear space for shading. Alpha stays linear.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_rgba_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Color> for wgpu::Color {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_linear_rgba();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_conversion_keeps_extremes() {
        assert_eq!(Color::BLACK.to_linear_rgba(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear_rgba();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn linear_conversion_darkens_midtones() {
        let [r, _, _, _] = Color::rgb(128, 0, 0).to_linear_rgba();
        assert!(r < 128.0 / 255.0);
        assert!((r - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn converts_to_linear_wgpu_color() {
        let white: wgpu::Color = Color::WHITE.into();
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.a - 1.0).abs() < 1e-6);

        let orange: wgpu::Color = Color::ORANGE.into();
        let [r, g, b, a] = Color::ORANGE.to_linear_rgba();
        assert_eq!(
            orange,
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            }
        );
        assert!(orange.g < 0xA5 as f64 / 255.0);
        assert_eq!(orange.b, 0.0);

        let translucent: wgpu::Color = Color::rgba(0, 0, 0, 128).into();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn displays_as_argb_hex() {
        assert_eq!(Color::ORANGE_RED.to_string(), "#FFFF4500");
    }
}

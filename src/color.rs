//! Colour helpers for the day/night blend
//!
//! Palettes are authored as hex strings and mixed per frame by the
//! day/night factor.

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalised RGBA for the vertex buffer
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Rgb::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

/// Blend two colours, rounding each channel to the nearest integer
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let channel = |x: u8, y: u8| lerp(x as f32, y as f32, t).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Blend two hex colours; unparseable input falls back to black
pub fn mix_hex(a: &str, b: &str, t: f32) -> Rgb {
    let black = Rgb::new(0, 0, 0);
    mix(
        hex_to_rgb(a).unwrap_or(black),
        hex_to_rgb(b).unwrap_or(black),
        t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_long_and_short_forms() {
        assert_eq!(hex_to_rgb("#9cd4ff"), Some(Rgb::new(0x9c, 0xd4, 0xff)));
        assert_eq!(hex_to_rgb("ffab40"), Some(Rgb::new(0xff, 0xab, 0x40)));
        assert_eq!(hex_to_rgb("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(hex_to_rgb("#1a2"), Some(Rgb::new(0x11, 0xaa, 0x22)));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        let day = Rgb::new(0, 100, 255);
        let night = Rgb::new(200, 0, 55);
        assert_eq!(mix(day, night, 0.0), day);
        assert_eq!(mix(day, night, 1.0), night);
        assert_eq!(mix(day, night, 0.5), Rgb::new(100, 50, 155));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.55, 0.28, 0.0), 0.55);
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_to_rgba() {
        let rgba = Rgb::new(255, 0, 51).to_rgba(0.5);
        assert_eq!(rgba, [1.0, 0.0, 0.2, 0.5]);
    }
}

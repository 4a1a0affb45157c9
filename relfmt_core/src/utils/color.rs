//! Color helpers: contrast adjustment, lightening/darkening and blending.
//!
//! Colors are RGBA with `f32` channels in `[0, 1]`. Hex strings use the
//! `#RGB`, `#RRGGBB` and `#AARRGGBB` forms (alpha first).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::RelfmtError;

/// Default factor for [`Rgba::lighter`], [`Rgba::darker`] and [`highlight`].
pub const DEFAULT_HIGHLIGHT_FACTOR: f32 = 1.5;

/// Contrast ratio below which [`adjust_contrast`] changes the source color.
pub const DEFAULT_CONTRAST_THRESHOLD: f32 = 1.2;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Channels are clamped to `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Opaque color. Callers are trusted to pass values in range.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// `[r, g, b, a]` as bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            to_byte(self.a),
        ]
    }

    /// HSL lightness, `(max + min) / 2`.
    pub fn hsl_lightness(self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max + min) / 2.0
    }

    /// Brighten by scaling the HSV value.
    ///
    /// A value pushed above 1 is taken out of the saturation instead, so very
    /// bright colors wash out towards white. A factor below 1 darkens by its
    /// inverse, and a factor `<= 0` leaves the color unchanged.
    pub fn lighter(self, factor: f32) -> Self {
        if factor <= 0.0 {
            return self;
        }
        if factor < 1.0 {
            return self.darker(1.0 / factor);
        }

        let (h, mut s, mut v) = self.to_hsv();
        v *= factor;
        if v > 1.0 {
            s = (s - (v - 1.0)).max(0.0);
            v = 1.0;
        }
        Self::from_hsv(h, s, v, self.a)
    }

    /// Darken by dividing the HSV value.
    pub fn darker(self, factor: f32) -> Self {
        if factor <= 0.0 {
            return self;
        }
        if factor < 1.0 {
            return self.lighter(1.0 / factor);
        }

        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, v / factor, self.a)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: clamp_unit(alpha),
            ..self
        }
    }

    /// Nearest xterm 256-color index (6x6x6 cube or grayscale ramp).
    pub fn to_ansi256(self) -> u8 {
        let [r, g, b, _] = self.to_rgba8();

        let cube_level = |c: u8| -> u8 {
            match c {
                0..=47 => 0,
                48..=114 => 1,
                _ => (c - 35) / 40,
            }
        };
        let level_value = |l: u8| -> u8 { if l == 0 { 0 } else { 55 + l * 40 } };

        let (lr, lg, lb) = (cube_level(r), cube_level(g), cube_level(b));
        let cube = (level_value(lr), level_value(lg), level_value(lb));
        let cube_index = 16 + 36 * lr + 6 * lg + lb;

        let average = (r as u16 + g as u16 + b as u16) / 3;
        let gray_step = (average.saturating_sub(8) / 10).min(23) as u8;
        let gray_value = 8 + 10 * gray_step;
        let gray_index = 232 + gray_step;

        let distance = |(cr, cg, cb): (u8, u8, u8)| -> i32 {
            let dr = r as i32 - cr as i32;
            let dg = g as i32 - cg as i32;
            let db = b as i32 - cb as i32;
            dr * dr + dg * dg + db * db
        };

        if distance((gray_value, gray_value, gray_value)) < distance(cube) {
            gray_index
        } else {
            cube_index
        }
    }

    /// Hue in degrees, saturation and value in `[0, 1]`.
    fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        (h, s, max)
    }

    fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h.rem_euclid(360.0) / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(r + m, g + m, b + m, a)
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_byte(value: f32) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

/// Darken dark colors and lighten light ones, so the result stands out
/// against the original.
pub fn highlight(color: Rgba, factor: f32) -> Rgba {
    if color.hsl_lightness() <= 0.5 {
        color.darker(factor)
    } else {
        color.lighter(factor)
    }
}

/// Channel-wise average of two colors, alpha included.
pub fn middle(a: Rgba, b: Rgba) -> Rgba {
    Rgba::new(
        (a.r + b.r) / 2.0,
        (a.g + b.g) / 2.0,
        (a.b + b.b) / 2.0,
        (a.a + b.a) / 2.0,
    )
}

/// Channel-wise `a - b`, clamped at zero.
pub fn difference(a: Rgba, b: Rgba) -> Rgba {
    Rgba::new(a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a)
}

/// WCAG relative luminance.
pub fn relative_luminance(color: Rgba) -> f32 {
    let linear = |c: f32| -> f32 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    linear(color.r) * 0.2126 + linear(color.g) * 0.7152 + linear(color.b) * 0.0722
}

/// WCAG contrast ratio, from 1 (identical) to 21 (black on white).
pub fn contrast(a: Rgba, b: Rgba) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// [`adjust_contrast_with`] using [`DEFAULT_CONTRAST_THRESHOLD`].
pub fn adjust_contrast(source: Rgba, comparison: Rgba) -> Rgba {
    adjust_contrast_with(source, comparison, DEFAULT_CONTRAST_THRESHOLD)
}

/// Returns `source` with its lightness pushed away from `comparison` if and
/// only if the two have a contrast ratio below `threshold`.
pub fn adjust_contrast_with(source: Rgba, comparison: Rgba, threshold: f32) -> Rgba {
    let ratio = contrast(source, comparison);
    if ratio >= threshold {
        return source;
    }

    let factor = 1.0 + 0.5 / ratio;
    tracing::debug!(ratio, factor, "adjusting low contrast color");
    if source.hsl_lightness() > comparison.hsl_lightness() {
        source.lighter(factor)
    } else {
        source.darker(factor)
    }
}

pub fn is_dark(color: Rgba) -> bool {
    color.hsl_lightness() < 0.5
}

pub fn adjust_alpha(color: Rgba, alpha: f32) -> Rgba {
    color.with_alpha(alpha)
}

impl FromStr for Rgba {
    type Err = RelfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let hex = input.strip_prefix('#').unwrap_or(input);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RelfmtError::invalid_color(s, "not a hex color"));
        }

        let byte = |i: usize| -> Result<u8, RelfmtError> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| RelfmtError::invalid_color(s, e.to_string()))
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| -> Result<u8, RelfmtError> {
                    let n = u8::from_str_radix(&hex[i..i + 1], 16)
                        .map_err(|e| RelfmtError::invalid_color(s, e.to_string()))?;
                    Ok(n * 17)
                };
                Ok(Rgba::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Rgba::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
            _ => Err(RelfmtError::invalid_color(s, "expected 3, 6 or 8 hex digits")),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", a, r, g, b)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = RelfmtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

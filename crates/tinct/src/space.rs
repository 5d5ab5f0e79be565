//! Color-space records and the transforms between them.
//!
//! All components are normalized to `[0, 1]`. Hue is a fraction of a full
//! turn, so `0.5` is 180°. Every transform is a pure function of its input.

use std::fmt::{self, Display, Formatter};

use palette::RgbHue;
use palette::encoding::Srgb;
use tinct_utils::round_with_precision;

/// A color in the RGB model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Alpha channel.
    pub alpha: f64,
}

impl Rgba {
    /// Opaque black, the value malformed hex strings resolve to.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Construct a new RGBA color.
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Convert to hue, saturation and lightness.
    pub fn to_hsla(self) -> Hsla {
        let Hue { hue, max, min, delta } = self.hue();
        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        Hsla::new(hue, saturation, lightness, self.alpha)
    }

    /// Convert to hue, saturation and brightness.
    pub fn to_hsba(self) -> Hsba {
        let Hue { hue, max, delta, .. } = self.hue();
        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        Hsba::new(hue, saturation, max, self.alpha)
    }

    /// The hue and channel extrema, shared by both cylindrical models.
    fn hue(self) -> Hue {
        let Self { red, green, blue, .. } = self;
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let mut hue = 0.0;
        if delta != 0.0 {
            // On ties the first matching channel wins, in RGB order.
            hue = if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            hue /= 6.0;
        }

        Hue { hue, max, min, delta }
    }
}

/// Intermediate result of the hue computation.
struct Hue {
    hue: f64,
    max: f64,
    min: f64,
    delta: f64,
}

/// A color in the HSL model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsla {
    /// Hue as a fraction of a full turn, in `[0, 1)`.
    pub hue: f64,
    /// HSL saturation.
    pub saturation: f64,
    /// Mean of the largest and smallest RGB channel.
    pub lightness: f64,
    /// Alpha channel.
    pub alpha: f64,
}

impl Hsla {
    /// Construct a new HSLA color.
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self { hue, saturation, lightness, alpha }
    }

    /// Convert to RGB.
    pub fn to_rgba(self) -> Rgba {
        let Self { hue, saturation: s, lightness: l, alpha } = self;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Rgba::new(
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
            alpha,
        )
    }

    /// Convert to HSB by way of RGB.
    pub fn to_hsba(self) -> Hsba {
        self.to_rgba().to_hsba()
    }
}

/// Evaluates one RGB channel of an HSL color at hue offset `t`.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// A color in the HSB (also known as HSV) model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsba {
    /// Hue as a fraction of a full turn, in `[0, 1)`.
    pub hue: f64,
    /// HSB saturation.
    pub saturation: f64,
    /// The largest RGB channel.
    pub brightness: f64,
    /// Alpha channel.
    pub alpha: f64,
}

impl Hsba {
    /// Construct a new HSBA color.
    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self { hue, saturation, brightness, alpha }
    }

    /// Convert to RGB.
    pub fn to_rgba(self) -> Rgba {
        let Self { hue, saturation: s, brightness: v, alpha } = self;
        let sextant = (hue * 6.0).floor();
        let f = hue * 6.0 - sextant;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (red, green, blue) = match sextant.rem_euclid(6.0) as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(red, green, blue, alpha)
    }
}

impl Display for Rgba {
    /// Formats as the nearest 8-bit hex string. The alpha digits are
    /// omitted for opaque colors.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.alpha == 1.0 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_hex_rgba())
        }
    }
}

impl Display for Hsla {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "hsl({}deg {} {}{})",
            degrees(self.hue),
            percent(self.saturation),
            percent(self.lightness),
            alpha(self.alpha),
        )
    }
}

impl Display for Hsba {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "hsb({}deg {} {}{})",
            degrees(self.hue),
            percent(self.saturation),
            percent(self.brightness),
            alpha(self.alpha),
        )
    }
}

/// Displays a hue fraction in degrees.
fn degrees(hue: f64) -> impl Display {
    round_with_precision(hue * 360.0, 2)
}

/// Displays a rounded percentage.
fn percent(ratio: f64) -> impl Display {
    tinct_utils::display(move |f| write!(f, "{}%", round_with_precision(ratio * 100.0, 2)))
}

/// Displays an alpha component if it is not 1.
fn alpha(value: f64) -> impl Display {
    tinct_utils::display(move |f| {
        if value != 1.0 {
            write!(f, " / {}", percent(value))?;
        }
        Ok(())
    })
}

impl From<Rgba> for palette::Srgba<f64> {
    fn from(color: Rgba) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<palette::Srgba<f64>> for Rgba {
    fn from(color: palette::Srgba<f64>) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Hsla> for palette::Hsla<Srgb, f64> {
    fn from(color: Hsla) -> Self {
        Self::new(
            RgbHue::from_degrees(color.hue * 360.0),
            color.saturation,
            color.lightness,
            color.alpha,
        )
    }
}

impl From<palette::Hsla<Srgb, f64>> for Hsla {
    fn from(color: palette::Hsla<Srgb, f64>) -> Self {
        Self::new(
            color.hue.into_positive_degrees() / 360.0,
            color.saturation,
            color.lightness,
            color.alpha,
        )
    }
}

impl From<Hsba> for palette::Hsva<Srgb, f64> {
    fn from(color: Hsba) -> Self {
        Self::new(
            RgbHue::from_degrees(color.hue * 360.0),
            color.saturation,
            color.brightness,
            color.alpha,
        )
    }
}

impl From<palette::Hsva<Srgb, f64>> for Hsba {
    fn from(color: palette::Hsva<Srgb, f64>) -> Self {
        Self::new(
            color.hue.into_positive_degrees() / 360.0,
            color.saturation,
            color.value,
            color.alpha,
        )
    }
}

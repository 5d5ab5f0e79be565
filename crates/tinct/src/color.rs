use std::fmt::{self, Debug, Display, Formatter};

use ecow::{EcoString, eco_format};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::space::{Hsba, Hsla, Rgba};

/// Colors with at least this luminance are [light](Color::is_light).
pub const LIGHT_THRESHOLD: f64 = 0.6;

/// A color backed by the hex string it was created from.
///
/// The string is kept as given (plus a leading `#`), while the channels are
/// resolved once at construction. Strings that are not valid 3, 6 or 8 digit
/// hex colors resolve to opaque black, so the two can disagree:
///
/// ```
/// # use tinct::{Color, Rgba};
/// let color = Color::new("##04655");
/// assert_eq!(color.hex(), "##04655");
/// assert_eq!(color.rgba(), Rgba::BLACK);
/// ```
///
/// Colors serialize as their hex string.
#[derive(Clone, PartialEq)]
pub struct Color {
    hex: EcoString,
    rgba: Rgba,
}

impl Color {
    /// Create a color from a hex string such as `#E40046`, `e40046`,
    /// `#FFF` or `#E4004657`.
    ///
    /// This never fails. Malformed strings resolve to opaque black.
    pub fn new(hex: &str) -> Self {
        let rgba = hex.parse::<Rgba>().unwrap_or_else(|message| {
            log::debug!("invalid hex color {hex:?} ({message}), using black");
            Rgba::BLACK
        });

        let hex = if hex.starts_with('#') { hex.into() } else { eco_format!("#{hex}") };
        Self { hex, rgba }
    }

    /// The hex string this color was created from, always starting with `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The red channel.
    pub fn red(&self) -> f64 {
        self.rgba.red
    }

    /// The green channel.
    pub fn green(&self) -> f64 {
        self.rgba.green
    }

    /// The blue channel.
    pub fn blue(&self) -> f64 {
        self.rgba.blue
    }

    /// The alpha channel.
    pub fn alpha(&self) -> f64 {
        self.rgba.alpha
    }

    /// The resolved channels.
    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    /// The color in the HSL model.
    pub fn hsla(&self) -> Hsla {
        self.rgba.to_hsla()
    }

    /// The color in the HSB model.
    pub fn hsba(&self) -> Hsba {
        self.rgba.to_hsba()
    }

    /// The weighted sum of the channels, without gamma correction.
    ///
    /// Good enough to decide between dark and light text on top of this
    /// color, see [`is_light`](Self::is_light).
    pub fn luminance(&self) -> f64 {
        let Rgba { red, green, blue, .. } = self.rgba;
        0.2126 * red + 0.7152 * green + 0.0722 * blue
    }

    /// Whether dark text on top of this color would contrast better than
    /// light text.
    pub fn is_light(&self) -> bool {
        self.luminance() >= LIGHT_THRESHOLD
    }

    /// Scales the color's HSL lightness by `factor`.
    ///
    /// Factors below one darken, above one lighten. The result is not
    /// clamped, but its hex string is always a well-formed 6 digit string
    /// (8 digits for translucent colors).
    ///
    /// ```
    /// # use tinct::Color;
    /// let darker = Color::new("#E40046").apply_lightness(0.3);
    /// assert_eq!(darker.hex(), "#440014");
    /// ```
    pub fn apply_lightness(&self, factor: f64) -> Self {
        let Hsla { hue, saturation, lightness, alpha } = self.hsla();
        let lightness = lightness * factor;
        let offset = saturation * if lightness < 0.5 { lightness } else { 1.0 - lightness };
        let brightness = lightness + offset;
        let saturation = if lightness > 0.0 { 2.0 * offset / brightness } else { 0.0 };

        let rgba = Hsba::new(hue, saturation, brightness, alpha).to_rgba();
        let hex = if alpha == 1.0 { rgba.to_hex() } else { rgba.to_hex_rgba() };
        Self::new(&hex)
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Self::new(hex)
    }
}

impl From<String> for Color {
    fn from(hex: String) -> Self {
        Self::new(&hex)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl Debug for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if f.alternate() {
            let Rgba { red, green, blue, alpha } = self.rgba;
            write!(f, "rgba({red}, {green}, {blue}, {alpha})")
        } else {
            write!(f, "rgb({:?})", self.hex)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Visitor for color deserialization.
struct ColorVisitor;

impl Visitor<'_> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a hex color string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Color::new(v))
    }
}

//! Hexadecimal color notation.

use std::str::FromStr;

use ecow::{EcoString, eco_format};

use crate::diag::{StrResult, bail};
use crate::space::Rgba;

impl Rgba {
    /// Formats the color as `#RRGGBB`, dropping the alpha channel.
    ///
    /// Each channel is truncated to a byte, so `0.5` becomes `7F`.
    pub fn to_hex(self) -> EcoString {
        let [r, g, b, _] = self.to_bytes();
        eco_format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Formats the color as `#RRGGBBAA`.
    pub fn to_hex_rgba(self) -> EcoString {
        let [r, g, b, a] = self.to_bytes();
        eco_format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// The channels as bytes, truncating toward zero.
    ///
    /// Components outside `[0, 1]` saturate at `0` and `255`.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|c| (255.0 * c) as u8)
    }
}

impl FromStr for Rgba {
    type Err = EcoString;

    /// Parses hex strings like the following:
    /// - `#AEF` (shorthand, four bits per channel),
    /// - `7a03c2` (without alpha),
    /// - `#abcdefff` (with alpha).
    ///
    /// Surrounding whitespace and any `#` characters are ignored and both
    /// lower and upper case are fine. Shorthand digits are scaled by `1/15`,
    /// full digits by `1/255`.
    fn from_str(hex: &str) -> StrResult<Self> {
        let digits: EcoString = hex.trim().chars().filter(|&c| c != '#').collect();
        if digits.chars().any(|c| !c.is_ascii_hexdigit()) {
            bail!("color string contains non-hexadecimal letters");
        }

        let len = digits.len();
        if !matches!(len, 3 | 6 | 8) {
            bail!("color string has wrong length");
        }

        let Ok(value) = u32::from_str_radix(&digits, 16) else {
            bail!("color string contains non-hexadecimal letters");
        };

        let byte = |shift: u32| f64::from((value >> shift) & 0xFF) / 255.0;
        let nibble = |shift: u32| f64::from((value >> shift) & 0xF) / 15.0;

        Ok(match len {
            8 => Self::new(byte(24), byte(16), byte(8), byte(0)),
            6 => Self::new(byte(16), byte(8), byte(0), 1.0),
            _ => Self::new(nibble(8), nibble(4), nibble(0), 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_strings() {
        #[track_caller]
        fn test(hex: &str, r: u8, g: u8, b: u8, a: u8) {
            let rgba = Rgba::from_str(hex).unwrap();
            assert_eq!(rgba.to_bytes(), [r, g, b, a]);
        }

        test("f61243ff", 0xf6, 0x12, 0x43, 0xff);
        test("b3d8b3", 0xb3, 0xd8, 0xb3, 0xff);
        test("fCd2a9AD", 0xfc, 0xd2, 0xa9, 0xad);
        test("#E40046", 0xe4, 0x00, 0x46, 0xff);
        test("##E4004657", 0xe4, 0x00, 0x46, 0x57);
        test("  #E40046\n", 0xe4, 0x00, 0x46, 0xff);
        test("233", 0x22, 0x33, 0x33, 0xff);
        test("#FFF", 0xff, 0xff, 0xff, 0xff);
    }

    #[test]
    fn test_parse_exact_channels() {
        let rgba = Rgba::from_str("E60045").unwrap();
        assert_eq!(rgba, Rgba::new(230.0 / 255.0, 0.0, 69.0 / 255.0, 1.0));

        let rgba = Rgba::from_str("#a5f").unwrap();
        assert_eq!(rgba, Rgba::new(10.0 / 15.0, 5.0 / 15.0, 1.0, 1.0));
    }

    #[test]
    fn test_parse_invalid_colors() {
        #[track_caller]
        fn test(hex: &str, message: &str) {
            assert_eq!(Rgba::from_str(hex), Err(EcoString::from(message)));
        }

        test("", "color string has wrong length");
        test("#", "color string has wrong length");
        test("0464", "color string has wrong length");
        test("#0465", "color string has wrong length");
        test("##04655", "color string has wrong length");
        test("f075ff011", "color string has wrong length");
        test("XXX", "color string contains non-hexadecimal letters");
        test("14B2AH", "color string contains non-hexadecimal letters");
        test("+FF", "color string contains non-hexadecimal letters");
        test("E4 00 46", "color string contains non-hexadecimal letters");
    }

    #[test]
    fn test_to_hex() {
        for hex in ["#E40046", "#F3F3F3", "#000000", "#711C46", "#DBEBE7"] {
            let rgba = Rgba::from_str(hex).unwrap();
            assert_eq!(rgba.to_hex(), hex);
            assert_eq!(rgba.to_hex_rgba(), eco_format!("{hex}FF"));
        }

        let rgba = Rgba::from_str("#E4004657").unwrap();
        assert_eq!(rgba.to_hex_rgba(), "#E4004657");
        assert_eq!(rgba.to_hex(), "#E40046");
    }

    #[test]
    fn test_to_hex_truncates() {
        assert_eq!(Rgba::new(0.5, 0.999, 0.0, 1.0).to_hex(), "#7FFE00");
        assert_eq!(Rgba::from_str("a5f").unwrap().to_hex(), "#AA55FF");
    }

    #[test]
    fn test_to_hex_saturates() {
        let rgba = Rgba::new(1.5, -0.2, 0.0, 2.0);
        assert_eq!(rgba.to_hex(), "#FF0000");
        assert_eq!(rgba.to_hex_rgba(), "#FF0000FF");
    }
}

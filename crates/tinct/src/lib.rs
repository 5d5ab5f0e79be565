//! A color value that lives as a hex string and converts between the RGB,
//! HSL and HSB models.
//!
//! A [`Color`] is created from a hex string and keeps that string as its
//! canonical form, which is also what it serializes to. Its channels are
//! resolved once at construction; everything else is computed on demand:
//!
//! - [`Rgba`], [`Hsla`] and [`Hsba`] hold the components of one color model
//!   each and convert between each other.
//! - [`Rgba`] parses from and formats to hex notation.
//! - [`Color::apply_lightness`] derives darker or lighter variants.
//!
//! ```
//! use tinct::Color;
//!
//! let color = Color::new("E40046");
//! assert_eq!(color.hex(), "#E40046");
//! assert!(!color.is_light());
//! assert_eq!(color.apply_lightness(0.5).hex(), "#720022");
//! ```

pub extern crate ecow;
pub extern crate palette;

pub mod diag;

mod color;
mod hex;
mod space;

pub use self::color::{Color, LIGHT_THRESHOLD};
pub use self::space::{Hsba, Hsla, Rgba};

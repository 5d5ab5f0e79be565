/// Rounds `value` to `places` digits after the decimal point.
///
/// Halfway cases round away from zero. Values for which rounding has no
/// effect (infinite, NaN, or too large to carry a fractional part) are
/// returned unchanged, as are precisions beyond what an `f64` can represent.
///
/// # Examples
///
/// ```
/// # use tinct_utils::round_with_precision;
/// assert_eq!(round_with_precision(342.0 / 360.0, 2), 0.95);
/// assert_eq!(round_with_precision(-0.56553, 2), -0.57);
/// ```
pub fn round_with_precision(value: f64, places: u8) -> f64 {
    value.rounded_to(places)
}

/// Decimal rounding for floating-point channels and test expectations.
pub trait Round: Sized {
    /// Returns `self` with `places` digits after the decimal point.
    fn rounded_to(self, places: u8) -> Self;
}

macro_rules! impl_round {
    ($($ty:ty),*) => {$(
        impl Round for $ty {
            fn rounded_to(self, places: u8) -> Self {
                // Past `2^MANTISSA_DIGITS` every representable value is an
                // integer, and past `DIGITS` places the offset itself is
                // inexact. Both make the multiplication below a no-op at best.
                if !self.is_finite()
                    || self.abs() >= (1_u64 << <$ty>::MANTISSA_DIGITS) as $ty
                    || u32::from(places) >= <$ty>::DIGITS
                {
                    return self;
                }

                let offset = (10 as $ty).powi(places.into());
                (self * offset).round() / offset
            }
        }
    )*};
}

impl_round!(f32, f64);

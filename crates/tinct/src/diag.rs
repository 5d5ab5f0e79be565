//! Diagnostics.

/// Early-return with a [`StrResult`].
///
/// ```ignore
/// bail!("color string has wrong length");
/// bail!("expected {} digits, found {}", 6, digits.len());
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($($tts:tt)*) => {
        return Err($crate::diag::error!($($tts)*))
    };
}

/// Construct an [`EcoString`] error message.
#[macro_export]
#[doc(hidden)]
macro_rules! __error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::diag::eco_format!($fmt, $($arg),*)
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__bail as bail,
    crate::__error as error,
    ecow::{eco_format, EcoString},
};

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

//! Fixed three-decimal values
//!
//! Downstream consumers compare and print coordinates, widths and opacities
//! as text with exactly three decimals. [`Fixed3`] keeps the number that text
//! represents, so rounding happens once, at construction, and formatting it
//! again always yields the same string.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::DECIMAL_PLACES;

/// A number rounded to three decimal places.
///
/// Rounding goes through decimal formatting of the exact binary value, so
/// `Fixed3::round(v).to_string()` equals `format!("{:.3}", v)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fixed3(f64);

impl Fixed3 {
    /// Round `value` to three decimals
    pub fn round(value: f64) -> Self {
        let text = format!("{:.*}", DECIMAL_PLACES, value);
        Self(text.parse().unwrap_or(value))
    }

    /// The rounded number
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiply and round again
    pub fn scaled(self, scale: f64) -> Self {
        Self::round(self.0 * scale)
    }
}

impl From<Fixed3> for f64 {
    fn from(value: Fixed3) -> Self {
        value.0
    }
}

impl fmt::Display for Fixed3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DECIMAL_PLACES, self.0)
    }
}

impl Serialize for Fixed3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

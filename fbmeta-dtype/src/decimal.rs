use std::fmt::{Display, Formatter};

use fbmeta_error::{FbmetaExpect, FbmetaResult, FbmetaUnwrap, fbmeta_bail};
use num_traits::ToPrimitive;

/// Largest precision any decimal type may declare.
pub const MAX_PRECISION: u8 = 76;

/// Largest scale any decimal type may declare.
pub const MAX_SCALE: i8 = 76;

/// Maximum precision for a Decimal128 type from Arrow
pub const DECIMAL128_MAX_PRECISION: u8 = 38;

/// Maximum precision for a Decimal256 type from Arrow
pub const DECIMAL256_MAX_PRECISION: u8 = 76;

/// Maximum scale for a Decimal128 type from Arrow
pub const DECIMAL128_MAX_SCALE: i8 = 38;

/// Maximum scale for a Decimal256 type from Arrow
pub const DECIMAL256_MAX_SCALE: i8 = 76;

/// Parameters that define the precision and scale of a decimal type.
///
/// Decimal types allow real numbers with a similar precision and scale to be represented exactly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DecimalFields"))]
pub struct DecimalDType {
    precision: u8,
    scale: i8,
}

/// Unvalidated fields of a deserialized [`DecimalDType`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "DecimalDType")]
struct DecimalFields {
    precision: u8,
    scale: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<DecimalFields> for DecimalDType {
    type Error = fbmeta_error::FbmetaError;

    fn try_from(fields: DecimalFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.precision, fields.scale)
    }
}

impl DecimalDType {
    /// Checked constructor for a `DecimalDType`.
    ///
    /// # Panics
    ///
    /// Attempting to build a new instance with invalid precision or scale values will panic.
    pub fn new(precision: u8, scale: i8) -> Self {
        Self::try_new(precision, scale).fbmeta_unwrap()
    }

    /// Fallible constructor for a `DecimalDType`.
    ///
    /// Precision and scale are each bounded by [`MAX_PRECISION`] and [`MAX_SCALE`]. A precision of
    /// zero is accepted.
    pub fn try_new(precision: u8, scale: i8) -> FbmetaResult<Self> {
        if precision > MAX_PRECISION {
            fbmeta_bail!("decimal precision {precision} exceeds MAX_PRECISION {MAX_PRECISION}");
        }
        if scale > MAX_SCALE {
            fbmeta_bail!("decimal scale {scale} exceeds MAX_SCALE {MAX_SCALE}");
        }
        Ok(Self { precision, scale })
    }

    /// The precision is the number of significant figures that the decimal tracks.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// The scale is the maximum number of digits relative to the decimal point.
    ///
    /// Positive scale means digits after decimal point, negative scale means number of
    /// zeros before the decimal point.
    pub fn scale(&self) -> i8 {
        self.scale
    }

    /// Whether values of this type fit in a 128-bit Arrow decimal.
    pub fn fits_decimal128(&self) -> bool {
        self.precision <= DECIMAL128_MAX_PRECISION && self.scale <= DECIMAL128_MAX_SCALE
    }

    /// Return the max number of bits required to fit a decimal with `precision` in.
    pub fn required_bit_width(&self) -> usize {
        (self.precision as f32 * 10.0f32.log(2.0))
            .ceil()
            .to_usize()
            .fbmeta_expect("too many bits required")
    }
}

impl Display for DecimalDType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "decimal({},{})", self.precision, self.scale)
    }
}

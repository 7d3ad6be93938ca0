//! Conversions between [`DecimalDType`] and Arrow's decimal data types.

use arrow_schema::{ArrowError, DataType};
use fbmeta_error::{FbmetaError, FbmetaResult, fbmeta_bail};

use crate::DecimalDType;

impl DecimalDType {
    /// The narrowest Arrow decimal type able to hold values of this type.
    ///
    /// Arrow requires a precision of at least one and a scale no greater than the precision, so
    /// either is an error here.
    pub fn to_arrow(&self) -> FbmetaResult<DataType> {
        if self.precision() == 0 {
            return Err(ArrowError::InvalidArgumentError(format!(
                "{self} has a precision of 0, Arrow decimals require at least 1"
            ))
            .into());
        }
        if i16::from(self.scale()) > i16::from(self.precision()) {
            return Err(ArrowError::InvalidArgumentError(format!(
                "{self} has scale {} greater than precision {}",
                self.scale(),
                self.precision()
            ))
            .into());
        }

        Ok(if self.fits_decimal128() {
            DataType::Decimal128(self.precision(), self.scale())
        } else {
            DataType::Decimal256(self.precision(), self.scale())
        })
    }
}

impl TryFrom<&DataType> for DecimalDType {
    type Error = FbmetaError;

    fn try_from(value: &DataType) -> Result<Self, Self::Error> {
        match value {
            DataType::Decimal128(precision, scale) | DataType::Decimal256(precision, scale) => {
                DecimalDType::try_new(*precision, *scale)
            }
            _ => fbmeta_bail!(MismatchedTypes: "decimal", value),
        }
    }
}

impl TryFrom<DataType> for DecimalDType {
    type Error = FbmetaError;

    fn try_from(value: DataType) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

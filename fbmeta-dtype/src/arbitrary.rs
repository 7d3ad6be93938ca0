use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{DECIMAL128_MAX_PRECISION, DECIMAL128_MAX_SCALE, DecimalDType};

impl<'a> Arbitrary<'a> for DecimalDType {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let precision = u.int_in_range(0..=DECIMAL128_MAX_PRECISION)?;
        let scale = u.int_in_range(-DECIMAL128_MAX_SCALE..=DECIMAL128_MAX_SCALE)?;
        Ok(Self::new(precision, scale))
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::{Arbitrary, Unstructured};

    use crate::DecimalDType;

    #[test]
    fn arbitrary_stays_within_decimal128() {
        let bytes = (0..=255u8).cycle().take(1024).collect::<Vec<_>>();
        let mut u = Unstructured::new(&bytes);
        for _ in 0..64 {
            let dtype = DecimalDType::arbitrary(&mut u).unwrap();
            assert!(dtype.fits_decimal128(), "{dtype}");
        }
    }
}

use fbmeta_error::{FbmetaError, fbmeta_err};
use fbmeta_flatbuffers::decimal as fb;
use fbmeta_flatbuffers::{FlatBufferRoot, ReadFlatBuffer, WriteFlatBuffer};
use flatbuffers::{FlatBufferBuilder, Follow, WIPOffset};

use crate::DecimalDType;

impl FlatBufferRoot for DecimalDType {}

impl WriteFlatBuffer for DecimalDType {
    type Target<'a> = fb::Decimal<'a>;

    fn write_flatbuffer<'fb>(
        &self,
        fbb: &mut FlatBufferBuilder<'fb>,
    ) -> WIPOffset<Self::Target<'fb>> {
        let mut builder = fb::DecimalBuilder::new(fbb);
        builder.add_scale(i32::from(self.scale()));
        builder.add_precision(i32::from(self.precision()));
        builder.finish()
    }
}

impl ReadFlatBuffer for DecimalDType {
    type Source<'a> = fb::Decimal<'a>;
    type Error = FbmetaError;

    fn read_flatbuffer<'buf>(
        fb: &<Self::Source<'buf> as Follow<'buf>>::Inner,
    ) -> Result<Self, Self::Error> {
        let precision = u8::try_from(fb.precision()).map_err(|_| {
            fbmeta_err!(InvalidSerde: "decimal precision {} does not fit in u8", fb.precision())
        })?;
        let scale = i8::try_from(fb.scale()).map_err(|_| {
            fbmeta_err!(InvalidSerde: "decimal scale {} does not fit in i8", fb.scale())
        })?;

        if precision == 0 {
            // An omitted precision and an explicit zero are encoded identically.
            log::debug!("Read decimal with precision 0 and scale {scale}");
        }

        DecimalDType::try_new(precision, scale)
            .map_err(|err| fbmeta_err!(Context: "invalid decimal flatbuffer", err))
    }
}

#[cfg(test)]
mod tests {
    use fbmeta_error::FbmetaError;
    use fbmeta_flatbuffers::decimal::{Decimal, DecimalArgs, finish_decimal_buffer};
    use fbmeta_flatbuffers::{ReadFlatBuffer, WriteFlatBufferExt};
    use flatbuffers::{FlatBufferBuilder, VerifierOptions};
    use rstest::rstest;

    use crate::DecimalDType;

    fn encode(precision: i32, scale: i32) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::new();
        let root = Decimal::create(&mut fbb, &DecimalArgs { precision, scale });
        finish_decimal_buffer(&mut fbb, root);
        fbb.finished_data().to_vec()
    }

    #[rstest]
    #[case(DecimalDType::new(10, 2))]
    #[case(DecimalDType::new(76, -7))]
    #[case(DecimalDType::new(38, 0))]
    fn round_trip(#[case] dtype: DecimalDType) {
        let bytes = dtype.write_flatbuffer_bytes();
        assert_eq!(DecimalDType::read_flatbuffer_bytes(&bytes).unwrap(), dtype);
    }

    #[test]
    fn zero_precision_is_preserved() {
        let dtype = DecimalDType::read_flatbuffer_bytes(&encode(0, 4)).unwrap();
        assert_eq!(dtype, DecimalDType::new(0, 4));
    }

    #[rstest]
    #[case::precision_negative(-1, 0)]
    #[case::precision_wide(300, 0)]
    #[case::scale_wide(10, 200)]
    #[case::scale_narrow(10, -129)]
    fn rejects_values_outside_field_width(#[case] precision: i32, #[case] scale: i32) {
        let err = DecimalDType::read_flatbuffer_bytes(&encode(precision, scale)).unwrap_err();
        assert!(matches!(err, FbmetaError::InvalidSerde(..)), "{err}");
    }

    #[test]
    fn rejects_precision_above_max() {
        let err = DecimalDType::read_flatbuffer_bytes(&encode(77, 0)).unwrap_err();
        assert!(matches!(err, FbmetaError::Context(..)));
        assert!(err.to_string().starts_with("invalid decimal flatbuffer"));
    }

    #[test]
    fn rejects_corrupt_bytes() {
        let err = DecimalDType::read_flatbuffer_bytes(&[0xFF; 3]).unwrap_err();
        assert!(matches!(err, FbmetaError::FlatBuffers(..)));
    }

    #[test]
    fn verifier_options_are_passed_through() {
        let bytes = encode(10, 2);
        let opts = VerifierOptions {
            max_tables: 0,
            ..Default::default()
        };
        assert!(DecimalDType::read_flatbuffer_bytes_with_opts(&bytes, &opts).is_err());
        assert_eq!(
            DecimalDType::read_flatbuffer_bytes_with_opts(&bytes, &VerifierOptions::default())
                .unwrap(),
            DecimalDType::new(10, 2)
        );
    }
}

pub mod flatbuffers;

#[cfg(test)]
#[cfg(feature = "serde")]
mod test {
    use serde_test::{Token, assert_tokens};

    use crate::DecimalDType;

    #[test]
    fn test_serde_decimal_json() {
        let serialized = serde_json::to_string(&DecimalDType::new(12, 3)).unwrap();
        assert_eq!(serialized, r#"{"precision":12,"scale":3}"#);
        assert_eq!(
            serde_json::from_str::<DecimalDType>(&serialized).unwrap(),
            DecimalDType::new(12, 3)
        );
    }

    #[test]
    fn test_serde_decimal_rejects_out_of_range() {
        let err = serde_json::from_str::<DecimalDType>(r#"{"precision":200,"scale":0}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("decimal precision 200 exceeds MAX_PRECISION 76"), "{err}");

        let err = serde_json::from_str::<DecimalDType>(r#"{"precision":10,"scale":120}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("decimal scale 120 exceeds MAX_SCALE 76"), "{err}");
    }

    #[test]
    fn test_serde_decimal() {
        assert_tokens(
            &DecimalDType::new(5, -2),
            &[
                Token::Struct {
                    name: "DecimalDType",
                    len: 2,
                },
                Token::Str("precision"),
                Token::U8(5),
                Token::Str("scale"),
                Token::I8(-2),
                Token::StructEnd,
            ],
        );
    }
}

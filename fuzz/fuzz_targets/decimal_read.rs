#![no_main]

use fbmeta_dtype::DecimalDType;
use fbmeta_flatbuffers::ReadFlatBuffer;
use fbmeta_flatbuffers::decimal::Decimal;
use libfuzzer_sys::{Corpus, fuzz_target};

// Arbitrary bytes must never panic the verified read path.
fuzz_target!(|data: &[u8]| -> Corpus {
    let Some((&offset, bytes)) = data.split_first() else {
        return Corpus::Reject;
    };

    let Ok(decimal) = Decimal::get_root(bytes, usize::from(offset)) else {
        return Corpus::Keep;
    };
    let owned = decimal.unpack();
    assert_eq!((decimal.precision(), decimal.scale()), (owned.precision, owned.scale));

    if offset == 0 {
        if let Ok(dtype) = DecimalDType::read_flatbuffer_bytes(bytes) {
            assert_eq!(i32::from(dtype.precision()), owned.precision);
            assert_eq!(i32::from(dtype.scale()), owned.scale);
        }
    }
    Corpus::Keep
});

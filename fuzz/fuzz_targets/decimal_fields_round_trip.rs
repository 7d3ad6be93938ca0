#![no_main]

use fbmeta_flatbuffers::decimal::{Decimal, DecimalArgs, finish_decimal_buffer, root_as_decimal};
use flatbuffers::FlatBufferBuilder;
use libfuzzer_sys::fuzz_target;

// Any pair of field values reads back as written.
fuzz_target!(|fields: (i32, i32)| {
    let (precision, scale) = fields;
    let mut fbb = FlatBufferBuilder::new();
    let root = Decimal::create(&mut fbb, &DecimalArgs { precision, scale });
    finish_decimal_buffer(&mut fbb, root);

    let decimal = root_as_decimal(fbb.finished_data()).unwrap();
    assert_eq!(decimal.precision(), precision);
    assert_eq!(decimal.scale(), scale);
});

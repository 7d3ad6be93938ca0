#![no_main]

use fbmeta_dtype::DecimalDType;
use fbmeta_error::FbmetaExpect;
use fbmeta_flatbuffers::{ReadFlatBuffer, WriteFlatBufferExt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|dtype: DecimalDType| {
    let bytes = dtype.write_flatbuffer_bytes();
    let read = DecimalDType::read_flatbuffer_bytes(&bytes).fbmeta_expect("read back decimal");
    assert_eq!(read, dtype);
});

#![allow(clippy::unwrap_used)]

use divan::Bencher;
use fbmeta_flatbuffers::decimal::{
    Decimal, DecimalArgs, finish_decimal_buffer, root_as_decimal, root_as_decimal_unchecked,
};
use flatbuffers::FlatBufferBuilder;

fn main() {
    divan::main();
}

fn encoded() -> Vec<u8> {
    let mut fbb = FlatBufferBuilder::new();
    let root = Decimal::create(
        &mut fbb,
        &DecimalArgs {
            precision: 38,
            scale: 10,
        },
    );
    finish_decimal_buffer(&mut fbb, root);
    fbb.finished_data().to_vec()
}

#[divan::bench]
fn verified_read(bencher: Bencher) {
    let bytes = encoded();
    bencher.bench(|| {
        let decimal = root_as_decimal(divan::black_box(&bytes)).unwrap();
        (decimal.precision(), decimal.scale())
    });
}

#[divan::bench]
fn unchecked_read(bencher: Bencher) {
    let bytes = encoded();
    bencher.bench(|| {
        let decimal = unsafe { root_as_decimal_unchecked(divan::black_box(&bytes)) };
        (decimal.precision(), decimal.scale())
    });
}

#[divan::bench]
fn build(bencher: Bencher) {
    bencher
        .with_inputs(|| FlatBufferBuilder::with_capacity(64))
        .bench_local_values(|mut fbb| {
            let root = Decimal::create(
                &mut fbb,
                &DecimalArgs {
                    precision: 38,
                    scale: 10,
                },
            );
            finish_decimal_buffer(&mut fbb, root);
            fbb.finished_data().len()
        });
}

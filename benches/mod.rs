use criterion::{criterion_group, criterion_main};

mod interp;

criterion_group!(
    benches,
    interp::feed::bench_feed_line,
    interp::feed::bench_feed_dispatch,
    interp::feed::bench_feed_streaming
);
criterion_main!(benches);

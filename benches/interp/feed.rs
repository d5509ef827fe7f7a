use criterion::{Criterion, Throughput};
use libcmd::interp::{Interpreter, Sink};
use libcmd::registry::Command;

struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _text: &str) {}
}

struct Set;

impl<S: Sink> Command<S> for Set {
    fn name(&self) -> &'static str {
        "set"
    }

    fn short_help(&self) -> &'static str {
        "stores a value"
    }

    fn long_help(&self) -> &'static str {
        "SYNTAX: set <addr> <val>\r\n"
    }

    fn execute<'a>(&'a self, _interp: &mut Interpreter<'a, S>, argv: &[&str]) {
        std::hint::black_box(argv.len());
    }
}

struct Drain;

impl<S: Sink> Command<S> for Drain {
    fn name(&self) -> &'static str {
        "drain"
    }

    fn short_help(&self) -> &'static str {
        "swallows streamed lines"
    }

    fn long_help(&self) -> &'static str {
        "SYNTAX: drain\r\n"
    }

    fn execute<'a>(&'a self, interp: &mut Interpreter<'a, S>, argv: &[&str]) {
        if interp.stream_handler().is_none() {
            interp.install_stream_handler(self);
        } else {
            std::hint::black_box(argv.len());
        }
    }
}

static SET: Set = Set;
static DRAIN: Drain = Drain;

/// Byte-feeding with no dispatch: accumulate then discard on an empty line.
pub fn bench_feed_line(c: &mut Criterion) {
    let line: &[u8] = b"0123 4567 89AB CDEF // trailing comment\r";
    let mut group = c.benchmark_group("interp");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("feed_line_no_match", |b| {
        let mut cmd = Interpreter::new(NullSink);
        cmd.set_echo(false);
        b.iter(|| cmd.feed_bytes(std::hint::black_box(line)));
    });
    group.finish();
}

/// Full path: accumulate, tokenize, prefix-match, invoke.
pub fn bench_feed_dispatch(c: &mut Criterion) {
    let line: &[u8] = b"set 0012 3456\r";
    let mut group = c.benchmark_group("interp");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("feed_dispatch", |b| {
        let mut cmd = Interpreter::new(NullSink);
        cmd.set_echo(false);
        cmd.register(&SET).unwrap();
        b.iter(|| cmd.feed_bytes(std::hint::black_box(line)));
    });
    group.finish();
}

/// Streaming override: every line forwarded without lookup.
pub fn bench_feed_streaming(c: &mut Criterion) {
    let line: &[u8] = b"aa55 aa55 aa55 aa55 aa55 aa55 aa55 aa55\r";
    let mut group = c.benchmark_group("interp");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("feed_streaming", |b| {
        let mut cmd = Interpreter::new(NullSink);
        cmd.set_echo(false);
        cmd.register(&DRAIN).unwrap();
        cmd.feed_str("drain\r");
        b.iter(|| cmd.feed_bytes(std::hint::black_box(line)));
    });
    group.finish();
}

//! helpers for logging.
use std::io::Write;

use log::LevelFilter;

fn builder(default_level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::builder();
    // `RUST_LOG` wins over the default.
    builder.filter_level(default_level).parse_default_env();
    builder.format(|buf, record| {
        let now = time::OffsetDateTime::now_utc();

        writeln!(
            buf,
            "{} {} time={} target={}",
            record.level(),
            record.args(),
            now,
            record.target()
        )
    });
    builder
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        builder(LevelFilter::Info).init();
    });
}

/// Install a logger whose output is captured by the test harness.
///
/// Safe to call from every test: only the first call in a process installs anything.
pub fn log_for_tests() {
    let _ = builder(LevelFilter::Debug).is_test(true).try_init();
}

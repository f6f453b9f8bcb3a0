//! Log sink for dispatcher output.
//!
//! Unknown messages are reported through a sink instead of being written to
//! stdout directly, so embedders and tests can capture the lines.

/// Accepts one line of text per call.
pub trait LogSink: Send + Sync {
    fn log(&self, line: &str);
}

/// Sink that prints each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, line: &str) {
        println!("{}", line);
    }
}

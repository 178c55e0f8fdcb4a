//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! prompt and the report itself.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber for `directive` (an `EnvFilter` string).
///
/// An unparseable directive falls back to `warn`. Calling this twice is
/// harmless: the second install is ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tolerates_bad_directives_and_repeat_calls() {
        init("not a [valid directive");
        init("debug");
    }
}

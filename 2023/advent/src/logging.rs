use std::io::Write;

use env_logger::{Builder, Env};

/// Route `log` records to stderr as `[advent] LEVEL: message`.
///
/// The filter defaults to `warn` and follows `RUST_LOG` when set. Calling it
/// again is harmless.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[advent] {}: {}", record.level(), record.args()))
        .try_init();
}

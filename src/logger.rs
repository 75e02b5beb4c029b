use std::io::Write;

use env_logger::{Builder, Env};

/// Initialize the logger. The level defaults to "info" and can be changed with the `RUST_LOG`
/// environment variable (e.g. `RUST_LOG=avl_bst=trace` to see every rotation).
pub fn initialize_logger() {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    // Prefix every line with its level and where it was logged from.
    builder.format(|buf, record| {
        let path = record.module_path().unwrap_or("");
        let line = record.line().map(|l| l.to_string()).unwrap_or_default();

        writeln!(
            buf,
            "[{} {}:{}] {}",
            record.level(),
            path,
            line,
            record.args()
        )
    });

    builder.init();
}

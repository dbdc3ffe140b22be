use std::io::Write as _;

use colored::Colorize as _;

use crate::style::ColorTheme as _;

/// Installs the global logger. `RUST_LOG` overrides the default `warn` filter.
/// Calling it more than once is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = record.level();
            writeln!(
                buf,
                "[{}] {}",
                level.as_str().color(level.color()).bold(),
                record.args()
            )
        })
        .try_init();
}

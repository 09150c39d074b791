use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{CliConfig, LogFormat};

/// Install the global subscriber. Events go to stderr so stdout carries
/// only command output.
pub fn init_tracing(config: &CliConfig) {
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.compact().without_time())
            .init(),
    }
}

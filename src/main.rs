//! Mono UI Gallery - Main Entry Point
//!
//! Native catalog of the Mono UI liquid glass components.

use mono_ui::app::application::run_app;
use mono_ui::helpers::get_or_create_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stdout and to a daily rolling file in the data directory.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "mono-ui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let _guard = init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Mono UI gallery");

    run_app();
}

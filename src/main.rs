//! artable binary entrypoint kept minimal. The full runtime lives in `artable::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use artable::args::{Args, apply_cli_overrides, determine_log_level, handle_print};

struct ArtableTimer;

impl tracing_subscriber::fmt::time::FormatTime for ArtableTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the env filter, letting `RUST_LOG` win over the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `<config>/logs/artable.log`, or stderr if the file is unavailable.
fn init_logging(level: &str) {
    let mut log_path = artable::theme::logs_dir();
    log_path.push("artable.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ArtableTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup never blocks on the log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ArtableTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let settings = apply_cli_overrides(&args, artable::theme::settings());
    tracing::info!(
        page = args.page,
        page_size = settings.default_page_size,
        api_url = %settings.api_url,
        print = args.print,
        "artable starting"
    );

    if args.print {
        if let Err(err) = handle_print(&settings, args.page).await {
            tracing::error!(error = %err, "print mode failed");
            eprintln!("artable: {err}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(err) = artable::app::run(settings, args.page).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("artable exited");
}

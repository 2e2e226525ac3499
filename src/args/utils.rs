//! Shared utilities for argument processing.

use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Layer command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from `settings.conf` (or defaults).
///
/// Output:
/// - Effective settings for this run.
///
/// Details:
/// - A `--page-size` outside the configured choices is ignored with a warning;
///   the configured default stays.
#[must_use]
pub fn apply_cli_overrides(args: &crate::args::Args, mut settings: Settings) -> Settings {
    if let Some(size) = args.page_size {
        if settings.page_size_options.contains(&size) {
            settings.default_page_size = size;
        } else {
            tracing::warn!(
                requested = size,
                allowed = ?settings.page_size_options,
                "page size not allowed; keeping configured default"
            );
        }
    }
    if let Some(url) = args.api_url.as_deref()
        && !url.trim().is_empty()
    {
        settings.api_url = url.trim().to_string();
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    fn verbose_wins_over_log_level() {
        let args = Args {
            verbose: true,
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    fn page_size_override_must_be_allowed() {
        let base = Settings {
            page_size_options: vec![10, 12],
            ..Settings::default()
        };
        let ok = Args {
            page_size: Some(10),
            api_url: Some("http://mirror/artworks".into()),
            ..Args::default()
        };
        let s = apply_cli_overrides(&ok, base.clone());
        assert_eq!(s.default_page_size, 10);
        assert_eq!(s.api_url, "http://mirror/artworks");

        let bad = Args {
            page_size: Some(99),
            ..Args::default()
        };
        assert_eq!(apply_cli_overrides(&bad, base).default_page_size, 12);
    }
}

//! Command-line argument definition.

use clap::Parser;

/// Highest `--page` accepted; far beyond any catalog the endpoint serves.
pub const MAX_START_PAGE: u64 = 1_000_000;

/// artable - Page through the Art Institute of Chicago catalog and pick artworks
#[derive(Parser, Debug, Default)]
#[command(name = "artable")]
#[command(version)]
#[command(about = "Page through the Art Institute of Chicago catalog and pick artworks across pages", long_about = None)]
pub struct Args {
    /// Rows per page (must be one of the configured page sizes)
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Page to open on startup (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_START_PAGE))]
    pub page: u64,

    /// Override the artworks endpoint URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Fetch one page, print it as a plain table, and exit without starting the TUI
    #[arg(short, long)]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_overrides() {
        let args = Args::parse_from([
            "artable",
            "--page-size",
            "25",
            "--page",
            "3",
            "--api-url",
            "http://localhost:9/artworks",
            "-v",
            "--print",
        ]);
        assert_eq!(args.page_size, Some(25));
        assert_eq!(args.page, 3);
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:9/artworks"));
        assert!(args.verbose);
        assert!(args.print);
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["artable"]);
        assert_eq!(args.page, 1);
        assert_eq!(args.log_level, "info");
        assert!(args.page_size.is_none());
        assert!(!args.print);
    }

    #[test]
    /// What: Start pages outside `1..=MAX_START_PAGE` are rejected by the parser.
    fn page_is_range_checked() {
        assert!(Args::try_parse_from(["artable", "--page", "0"]).is_err());
        let huge = u64::MAX.to_string();
        assert!(Args::try_parse_from(["artable", "--page", huge.as_str()]).is_err());
        let max = MAX_START_PAGE.to_string();
        let args = Args::try_parse_from(["artable", "--page", max.as_str()]).expect("in range");
        assert_eq!(args.page, MAX_START_PAGE);
    }
}

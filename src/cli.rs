//! Command-line interface definitions for newsrank.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The one positional argument selects where documents come from: a fresh
//! scrape of the selected site, or the cache file written by a previous run.

use clap::{Parser, ValueEnum};
use std::fmt;

/// Command-line arguments for the newsrank application.
///
/// # Examples
///
/// ```sh
/// # Scrape France 24 and rank articles against the default query
/// newsrank
///
/// # Rank cached documents against an explicit query, top 3 results
/// newsrank cached --query "world cup" --top 3
///
/// # Scrape Kompas instead, with a shorter request timeout
/// newsrank fresh --site kompas --timeout-secs 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Document source: scrape the site or reuse the cache file
    #[arg(value_enum, default_value_t = Mode::Fresh)]
    pub mode: Mode,

    /// News site profile to scrape
    #[arg(short, long, value_enum, default_value_t = Site::France24)]
    pub site: Site,

    /// Query string the articles are ranked against (defaults per site)
    #[arg(short, long)]
    pub query: Option<String>,

    /// How many of the best-scoring articles to print
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Cache file path (defaults to the site's own cache file)
    #[arg(long)]
    pub cache_file: Option<String>,

    /// Emit the ranked hits as a JSON array instead of framed text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Where the document set comes from for this run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Scrape the site, normalize, and rewrite the cache file
    Fresh,
    /// Read the documents back from the cache file, skipping the network
    Cached,
}

/// The two supported news sites.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    France24,
    Kompas,
}

impl Site {
    /// Query used when none is given on the command line.
    pub fn default_query(&self) -> &'static str {
        match self {
            Site::France24 => "covid 19",
            Site::Kompas => "another day in",
        }
    }

    /// Cache file written and read for this site when `--cache-file` is
    /// not given.
    pub fn default_cache_file(&self) -> &'static str {
        match self {
            Site::France24 => "cache_france24.json",
            Site::Kompas => "cache_kompas.json",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Fresh => write!(f, "fresh"),
            Mode::Cached => write!(f, "cached"),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::France24 => write!(f, "france24"),
            Site::Kompas => write!(f, "kompas"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(&["newsrank"]);

        assert_eq!(cli.mode, Mode::Fresh);
        assert_eq!(cli.site, Site::France24);
        assert_eq!(cli.query, None);
        assert_eq!(cli.top, 5);
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.cache_file, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_cached_mode() {
        let cli = Cli::parse_from(&["newsrank", "cached"]);
        assert_eq!(cli.mode, Mode::Cached);
    }

    #[test]
    fn test_cli_site_and_query() {
        let cli = Cli::parse_from(&[
            "newsrank",
            "fresh",
            "--site",
            "kompas",
            "--query",
            "world cup",
        ]);

        assert_eq!(cli.mode, Mode::Fresh);
        assert_eq!(cli.site, Site::Kompas);
        assert_eq!(cli.query.as_deref(), Some("world cup"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["newsrank", "-s", "kompas", "-q", "liga", "-t", "3"]);

        assert_eq!(cli.site, Site::Kompas);
        assert_eq!(cli.query.as_deref(), Some("liga"));
        assert_eq!(cli.top, 3);
    }

    #[test]
    fn test_cli_json_and_cache_file() {
        let cli = Cli::parse_from(&["newsrank", "cached", "--json", "--cache-file", "/tmp/x.json"]);

        assert!(cli.json);
        assert_eq!(cli.cache_file.as_deref(), Some("/tmp/x.json"));
    }

    #[test]
    fn test_site_defaults() {
        assert_eq!(Site::France24.default_query(), "covid 19");
        assert_eq!(Site::Kompas.default_query(), "another day in");
        assert_eq!(Site::France24.default_cache_file(), "cache_france24.json");
        assert_eq!(Site::Kompas.default_cache_file(), "cache_kompas.json");
    }

    #[test]
    fn test_display_matches_value_enum_names() {
        assert_eq!(Site::France24.to_string(), "france24");
        assert_eq!(Site::Kompas.to_string(), "kompas");
        assert_eq!(Mode::Fresh.to_string(), "fresh");
        assert_eq!(Mode::Cached.to_string(), "cached");
    }
}

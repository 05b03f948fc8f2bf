//! Command-line interface definitions for Newswire.
//!
//! This module defines the three subcommands and their options using the
//! `clap` crate. Invoking the binary with no subcommand prints help text
//! and exits successfully without issuing any request.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the Newswire client.
///
/// # Examples
///
/// ```sh
/// # Ten most recent headlines from one source
/// newswire fetch bbc-news --limit 10
///
/// # All technology sources
/// newswire sources --category technology
///
/// # Full-text search across all sources
/// newswire search "lithium mining"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch top headlines from one news source
    Fetch {
        /// Source identifier, e.g. "bbc-news" (list them with `sources`)
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        source: String,

        /// Maximum number of headlines to request (capped at 100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// List the news sources the service can fetch from
    Sources {
        /// Restrict the listing to one category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },

    /// Search articles across all sources
    Search {
        /// Search term, matched against all indexed article fields
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        term: String,
    },
}

/// The fixed category set the sources listing can filter on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Business,
    Entertainment,
    Gaming,
    General,
    Music,
    Politics,
    ScienceAndNature,
    Sport,
    Technology,
}

impl Category {
    /// Wire name forwarded verbatim as the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Gaming => "gaming",
            Category::General => "general",
            Category::Music => "music",
            Category::Politics => "politics",
            Category::ScienceAndNature => "science-and-nature",
            Category::Sport => "sport",
            Category::Technology => "technology",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_parsing() {
        let cli = Cli::parse_from(["newswire", "fetch", "bbc-news", "--limit", "25"]);
        match cli.command {
            Some(Commands::Fetch { source, limit }) => {
                assert_eq!(source, "bbc-news");
                assert_eq!(limit, Some(25));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_short_flag_and_default_limit() {
        let cli = Cli::parse_from(["newswire", "fetch", "reuters", "-l", "5"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Fetch { limit: Some(5), .. })
        ));

        let cli = Cli::parse_from(["newswire", "fetch", "reuters"]);
        assert!(matches!(cli.command, Some(Commands::Fetch { limit: None, .. })));
    }

    #[test]
    fn test_fetch_rejects_zero_limit() {
        let result = Cli::try_parse_from(["newswire", "fetch", "reuters", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sources_category_parsing() {
        let cli = Cli::parse_from(["newswire", "sources", "--category", "science-and-nature"]);
        match cli.command {
            Some(Commands::Sources { category }) => {
                assert_eq!(category, Some(Category::ScienceAndNature));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["newswire", "sources"]);
        assert!(matches!(cli.command, Some(Commands::Sources { category: None })));
    }

    #[test]
    fn test_sources_rejects_unknown_category() {
        let result = Cli::try_parse_from(["newswire", "sources", "-c", "astrology"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_parsing() {
        let cli = Cli::parse_from(["newswire", "search", "lithium mining"]);
        match cli.command {
            Some(Commands::Search { term }) => assert_eq!(term, "lithium mining"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_rejects_empty_term() {
        let result = Cli::try_parse_from(["newswire", "search", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["newswire"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::ScienceAndNature.as_str(), "science-and-nature");
        assert_eq!(Category::Technology.as_str(), "technology");
        assert_eq!(Category::Sport.as_str(), "sport");
    }
}

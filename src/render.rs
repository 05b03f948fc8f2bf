//! Console rendering for article and source listings.
//!
//! Pure functions from response data to display text; no network access and
//! no mutable state. An empty input sequence renders a single "no results"
//! notice instead of an empty block.

use crate::models::{Article, Source};
use console::style;
use std::fmt::Write;

/// Notice printed in place of an empty listing.
pub const NO_RESULTS: &str = "No results found.";

/// Render a list of articles, one text block per article, in input order.
pub fn article_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    for article in articles {
        writeln!(out, "{}", style(&article.title).bold()).unwrap();
        match &article.author {
            Some(author) => writeln!(out, "  by {author}").unwrap(),
            None => writeln!(out, "  unknown author").unwrap(),
        }
        if let Some(description) = &article.description {
            writeln!(out, "  {description}").unwrap();
        }
        writeln!(out, "  {}", style(&article.url).underlined()).unwrap();
        writeln!(
            out,
            "  published {} UTC",
            article.published_at.format("%Y-%m-%d %H:%M")
        )
        .unwrap();
        writeln!(out).unwrap();
    }
    out
}

/// Render a list of sources, one text block per source, in input order.
pub fn source_list(sources: &[Source]) -> String {
    if sources.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    for source in sources {
        writeln!(out, "{} ({})", style(&source.name).bold(), source.id).unwrap();
        if !source.description.is_empty() {
            writeln!(out, "  {}", source.description).unwrap();
        }
        if !source.url.is_empty() {
            writeln!(out, "  {}", style(&source.url).underlined()).unwrap();
        }
        writeln!(
            out,
            "  category: {}  language: {}  country: {}",
            source.category, source.language, source.country
        )
        .unwrap();
        writeln!(out).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(title: &str, author: Option<&str>) -> Article {
        Article {
            author: author.map(String::from),
            title: title.to_string(),
            description: Some(format!("About {title}.")),
            url: format!("https://example.org/{}", title.to_lowercase()),
            published_at: Utc.with_ymd_and_hms(2025, 7, 4, 16, 20, 0).unwrap(),
        }
    }

    fn source(id: &str, name: &str, category: &str) -> Source {
        Source {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} coverage."),
            url: format!("https://{id}.example.org"),
            category: category.to_string(),
            language: "en".to_string(),
            country: "us".to_string(),
        }
    }

    #[test]
    fn test_empty_article_list_renders_notice_only() {
        assert_eq!(article_list(&[]), "No results found.\n");
    }

    #[test]
    fn test_empty_source_list_renders_notice_only() {
        assert_eq!(source_list(&[]), "No results found.\n");
    }

    #[test]
    fn test_two_articles_render_one_block_each_in_order() {
        let articles = vec![
            article("First", Some("Jane Doe")),
            article("Second", Some("John Roe")),
        ];
        let out = article_list(&articles);

        for needle in [
            "First",
            "by Jane Doe",
            "https://example.org/first",
            "Second",
            "by John Roe",
            "https://example.org/second",
        ] {
            assert!(out.contains(needle), "missing {needle:?} in {out}");
        }
        assert!(out.matches("published 2025-07-04 16:20 UTC").count() == 2);
        assert!(out.find("First").unwrap() < out.find("Second").unwrap());
    }

    #[test]
    fn test_missing_author_gets_placeholder() {
        let out = article_list(&[article("Unsigned", None)]);
        assert!(out.contains("unknown author"));
        assert!(!out.contains("by "));
    }

    #[test]
    fn test_missing_description_is_skipped() {
        let mut one = article("Terse", Some("A. Writer"));
        one.description = None;
        let with = article_list(&[article("Terse", Some("A. Writer"))]);
        let without = article_list(&[one]);
        assert_eq!(with.lines().count(), without.lines().count() + 1);
    }

    #[test]
    fn test_source_block_contents() {
        let out = source_list(&[source("ars-technica", "Ars Technica", "technology")]);
        assert!(out.contains("Ars Technica (ars-technica)"));
        assert!(out.contains("https://ars-technica.example.org"));
        assert!(out.contains("category: technology  language: en  country: us"));
    }

    #[test]
    fn test_sources_render_in_input_order() {
        let out = source_list(&[
            source("alpha", "Alpha Wire", "general"),
            source("beta", "Beta Post", "politics"),
        ]);
        assert!(out.find("Alpha Wire").unwrap() < out.find("Beta Post").unwrap());
    }
}

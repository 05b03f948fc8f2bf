//! Data models for the news service's JSON responses.
//!
//! This module defines the core data structures used throughout the client:
//! - [`Article`]: one news story as returned by the headline and search queries
//! - [`Source`]: one publisher/outlet the service can serve articles from
//! - [`ArticlesResponse`] / [`SourcesResponse`]: the top-level response envelopes
//!
//! All types are transient; they live for the duration of one command
//! invocation and are never persisted. Unknown upstream fields (`status`,
//! `totalResults`, nested objects) are ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One news story record.
///
/// `author` and `description` are frequently `null` upstream, so both are
/// optional. `publishedAt` arrives as an RFC 3339 timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    /// The article's byline, when the service knows it.
    #[serde(default)]
    pub author: Option<String>,
    /// The article title/headline.
    pub title: String,
    /// A short teaser for the article body.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full story.
    pub url: String,
    /// Publication timestamp.
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

/// A news publisher/outlet.
///
/// The `id` doubles as the fetch key accepted by the top-headlines query.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// Identifier used as the `sources` query parameter, e.g. `bbc-news`.
    pub id: String,
    /// Human-readable outlet name.
    pub name: String,
    /// Blurb describing the outlet's coverage.
    #[serde(default)]
    pub description: String,
    /// The outlet's homepage.
    #[serde(default)]
    pub url: String,
    /// Coverage category, e.g. `technology`.
    #[serde(default)]
    pub category: String,
    /// Two-letter language code.
    #[serde(default)]
    pub language: String,
    /// Two-letter country code.
    #[serde(default)]
    pub country: String,
}

/// Envelope for the `/v2/top-headlines` and `/v2/everything` responses.
#[derive(Debug, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

/// Envelope for the `/v2/sources` response.
#[derive(Debug, Deserialize)]
pub struct SourcesResponse {
    pub sources: Vec<Source>,
}

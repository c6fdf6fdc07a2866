//! Output formatting for the listing tool

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::listing::DomainListing;

pub mod html;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment for embedding in the intranet page (default)
    #[default]
    Html,
    /// JSON document for scripts
    Json,
}

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// Tool version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Render a domain listing in the requested format
pub fn render(listing: &DomainListing, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(html::render_listing(listing)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonOutput::new(listing))?),
    }
}

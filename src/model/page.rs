//! Page-level types.

use super::{ImageEntry, LayoutItem, NamedRef, PageItem};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single page of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed, document order)
    pub page: u32,

    /// Plain text of the page
    pub text: String,

    /// Markdown rendering of the page
    pub md: String,

    /// Image entries on the page
    #[serde(default)]
    pub images: Vec<ImageEntry>,

    /// Chart references on the page
    #[serde(default)]
    pub charts: Vec<NamedRef>,

    /// Table references on the page
    #[serde(default)]
    pub tables: Vec<NamedRef>,

    /// Detected layout regions
    #[serde(default)]
    pub layout: Vec<LayoutItem>,

    /// Content items on the page
    #[serde(default)]
    pub items: Vec<PageItem>,

    /// Page processing status
    pub status: String,

    /// Outbound links found on the page
    #[serde(default)]
    pub links: Vec<String>,

    /// Page width in pixels
    pub width: u32,

    /// Page height in pixels
    pub height: u32,

    /// Whether this page escalated to higher-cost processing
    #[serde(rename = "triggeredAutoMode")]
    pub triggered_auto_mode: bool,

    /// Processing mode used for the page
    #[serde(rename = "parsingMode")]
    pub parsing_mode: String,

    /// Free-form structured data extracted from the page
    #[serde(rename = "structuredData", default)]
    pub structured_data: Option<Map<String, Value>>,

    /// Whether the page has no structured content
    #[serde(rename = "noStructuredContent")]
    pub no_structured_content: bool,

    /// Whether the page has no text content
    #[serde(rename = "noTextContent")]
    pub no_text_content: bool,
}

impl Page {
    /// Page dimensions as a (width, height) tuple, in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the page carries neither text nor structured content.
    pub fn is_blank(&self) -> bool {
        self.no_text_content && self.no_structured_content
    }
}

//! # docparse
//!
//! Typed client-side accessor for document parsing job results.
//!
//! This library wraps the JSON payload of a completed parsing job into
//! typed objects and exposes convenience accessors for text, markdown,
//! structured data, images, tables, and charts, plus lazy fetching of
//! binary artifacts (images, PDF and XLSX renditions) over authenticated
//! HTTP.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docparse::ParseResult;
//!
//! # async fn run(payload: serde_json::Value) -> docparse::Result<()> {
//! // Wrap a completed job's payload
//! let result = ParseResult::builder("job-123", "report.pdf")
//!     .with_api_key("your-api-key")
//!     .build_from_value(payload)?;
//!
//! // In-memory accessors
//! println!("{}", result.markdown());
//! println!("{} pages", result.page_count());
//!
//! // Lazy artifact fetch
//! let pdf = result.pdf_data().await?;
//! let saved = result.save_all_images("./images").await?;
//! println!("saved {} images, pdf is {} bytes", saved.len(), pdf.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Typed result model**: pages, content items, images, layout
//!   regions, usage metadata
//! - **Tolerant normalization**: bare-name and record-shaped artifact
//!   entries both validate
//! - **Lazy artifact fetch**: per-job image/PDF/XLSX endpoints, one
//!   request per call
//! - **Blocking variants**: every fetch/save operation has a
//!   `*_blocking` counterpart for non-async callers
//!
//! Configuration is resolved per field: explicit argument, then the
//! `DOCPARSE_API_KEY` / `DOCPARSE_BASE_URL` environment variables, then
//! the default service endpoint. A missing API key is not an error until
//! the first network call.

mod blocking;
mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod result;

// Re-export commonly used types
pub use config::{Config, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use model::{
    BBox, ImageEntry, ImageItem, JobMetadata, JobResult, LayoutItem, NamedRef, Page, PageItem,
};
pub use result::{JobStatus, ParseResult, ParseResultBuilder};

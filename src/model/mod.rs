//! Data model for parsed-document job results.
//!
//! This module mirrors the JSON payload a completed parsing job returns:
//! pages, content items, image/chart/table references, layout regions,
//! and job-level usage metadata. All types round-trip losslessly through
//! `serde_json`.

mod item;
mod job;
mod page;

pub use item::{BBox, ImageEntry, ImageItem, LayoutItem, NamedRef, PageItem};
pub use job::{JobMetadata, JobResult};
pub use page::Page;

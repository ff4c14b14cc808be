//! Page-content item types: bounding boxes, content items, images, layout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bounding box in page-coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// X coordinate of the box origin
    pub x: f64,

    /// Y coordinate of the box origin
    pub y: f64,

    /// Box width
    pub w: f64,

    /// Box height
    pub h: f64,
}

/// A content element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItem {
    /// Item type tag (e.g., "heading", "text", "table")
    #[serde(rename = "type")]
    pub item_type: String,

    /// Indentation level, if any
    #[serde(default)]
    pub lvl: Option<u32>,

    /// Plain-text content of the item
    #[serde(default)]
    pub value: Option<String>,

    /// Markdown rendering of the item
    #[serde(default)]
    pub md: Option<String>,

    /// Row grid, populated only for table-like items
    #[serde(default)]
    pub rows: Option<Vec<Vec<String>>>,

    /// Bounding box of the item on the page
    #[serde(rename = "bBox")]
    pub bbox: BBox,
}

/// A full image descriptor on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    /// Image name, unique per job; used to fetch the binary payload
    pub name: String,

    /// Rendered height
    pub height: f64,

    /// Rendered width
    pub width: f64,

    /// X position on the page
    pub x: f64,

    /// Y position on the page
    pub y: f64,

    /// Original width in pixels
    pub original_width: u32,

    /// Original height in pixels
    pub original_height: u32,

    /// Image type tag (e.g., object image vs. full-page screenshot)
    #[serde(rename = "type")]
    pub image_type: String,
}

impl ImageItem {
    /// Dump the descriptor as a JSON object.
    pub fn record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("name".to_string(), self.name.clone().into());
        record.insert("height".to_string(), self.height.into());
        record.insert("width".to_string(), self.width.into());
        record.insert("x".to_string(), self.x.into());
        record.insert("y".to_string(), self.y.into());
        record.insert("original_width".to_string(), self.original_width.into());
        record.insert("original_height".to_string(), self.original_height.into());
        record.insert("type".to_string(), self.image_type.clone().into());
        record
    }
}

/// An image entry as it appears in a page payload.
///
/// The service usually emits a full descriptor, but older payloads carry
/// bare image names. Both shapes validate; accessors normalize them to a
/// single record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    /// Full image descriptor
    Item(ImageItem),

    /// Bare image name
    Name(String),
}

impl ImageEntry {
    /// The image name, whichever shape the entry has.
    pub fn name(&self) -> &str {
        match self {
            ImageEntry::Item(item) => &item.name,
            ImageEntry::Name(name) => name,
        }
    }

    /// Normalize the entry to a JSON object.
    ///
    /// A bare name becomes `{"name": <name>}`.
    pub fn record(&self) -> Map<String, Value> {
        match self {
            ImageEntry::Item(item) => item.record(),
            ImageEntry::Name(name) => {
                let mut record = Map::new();
                record.insert("name".to_string(), name.clone().into());
                record
            }
        }
    }
}

/// A chart or table reference in a page payload.
///
/// Entries are bare names in current payloads, but record-shaped entries
/// also validate and pass through with their fields intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamedRef {
    /// Bare artifact name
    Name(String),

    /// Record-shaped entry
    Record(Map<String, Value>),
}

impl NamedRef {
    /// The artifact name, if the entry carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            NamedRef::Name(name) => Some(name),
            NamedRef::Record(record) => record.get("name").and_then(Value::as_str),
        }
    }

    /// Normalize the entry to a JSON object.
    pub fn record(&self) -> Map<String, Value> {
        match self {
            NamedRef::Name(name) => {
                let mut record = Map::new();
                record.insert("name".to_string(), name.clone().into());
                record
            }
            NamedRef::Record(record) => record.clone(),
        }
    }
}

/// A detected layout region on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Name of the image containing the region
    pub image: String,

    /// Detection confidence in [0, 1]
    pub confidence: f64,

    /// Region label (e.g., "title", "figure")
    pub label: String,

    /// Bounding box of the region
    pub bbox: BBox,

    /// Whether the region is likely noise
    #[serde(rename = "isLikelyNoise")]
    pub is_likely_noise: bool,
}

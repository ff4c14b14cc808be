//! Job-level types: the root result record and usage metadata.

use super::Page;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Usage metadata for a parsing job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Credits consumed by the job
    pub credits_used: u64,

    /// Per-feature credits-usage breakdown
    #[serde(default)]
    pub job_credits_usage: Map<String, Value>,

    /// Total number of pages in the job
    pub job_pages: u64,

    /// Number of pages that escalated to higher-cost processing
    pub job_auto_mode_triggered_pages: u64,

    /// Whether the job was served from cache
    pub job_is_cache_hit: bool,
}

/// The complete result of a parsing job.
///
/// Pages are kept in document order (page number ascending). `error`
/// being set means the job failed, regardless of `is_done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Pages of the document, in document order
    pub pages: Vec<Page>,

    /// Usage metadata for the job
    pub job_metadata: JobMetadata,

    /// Logical name of the parsed source file
    pub file_name: String,

    /// ID of the job that produced this result
    pub job_id: String,

    /// Whether the job has completed
    #[serde(default)]
    pub is_done: bool,

    /// Error message if the job failed
    #[serde(default)]
    pub error: Option<String>,
}

impl JobResult {
    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Whether the job failed.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> Value {
        json!({
            "pages": [
                {
                    "page": 1,
                    "text": "first",
                    "md": "# first",
                    "status": "OK",
                    "width": 612,
                    "height": 792,
                    "triggeredAutoMode": false,
                    "parsingMode": "fast",
                    "noStructuredContent": true,
                    "noTextContent": false
                }
            ],
            "job_metadata": {
                "credits_used": 2,
                "job_pages": 1,
                "job_auto_mode_triggered_pages": 0,
                "job_is_cache_hit": false
            },
            "file_name": "report.pdf",
            "job_id": "job-123",
            "is_done": true
        })
    }

    #[test]
    fn test_round_trip() {
        let result: JobResult = serde_json::from_value(sample_result()).unwrap();
        let encoded = serde_json::to_value(&result).unwrap();
        let decoded: JobResult = serde_json::from_value(encoded).unwrap();

        assert_eq!(result, decoded);
    }

    #[test]
    fn test_defaults() {
        let mut value = sample_result();
        value.as_object_mut().unwrap().remove("is_done");

        let result: JobResult = serde_json::from_value(value).unwrap();
        assert!(!result.is_done);
        assert!(result.error.is_none());
        assert!(result.job_metadata.job_credits_usage.is_empty());
    }

    #[test]
    fn test_page_lookup() {
        let result: JobResult = serde_json::from_value(sample_result()).unwrap();

        assert_eq!(result.page_count(), 1);
        assert_eq!(result.get_page(1).unwrap().text, "first");
        assert!(result.get_page(0).is_none());
        assert!(result.get_page(2).is_none());
    }

    #[test]
    fn test_is_failed() {
        let mut result: JobResult = serde_json::from_value(sample_result()).unwrap();
        assert!(!result.is_failed());

        result.error = Some("parse failure".to_string());
        assert!(result.is_failed());
    }

    #[test]
    fn test_missing_metadata_fails() {
        let mut value = sample_result();
        value.as_object_mut().unwrap().remove("job_metadata");

        let result: Result<JobResult, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}

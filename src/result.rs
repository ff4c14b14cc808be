//! Result façade over a completed parsing job.
//!
//! [`ParseResult`] owns the validated [`JobResult`] of one job together
//! with the credentials needed to fetch its binary artifacts. Read
//! accessors never perform I/O; fetch and save operations issue one
//! authenticated HTTP request per call.

use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde_json::{Map, Value};
use tokio::fs;

use crate::blocking;
use crate::client::ArtifactClient;
use crate::config::Config;
use crate::error::Result;
use crate::model::{JobMetadata, JobResult, NamedRef, Page};

/// Terminal status of a parsing job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// The job produced a usable result
    Success,
    /// The job failed with an error message
    Error,
}

impl JobStatus {
    /// Status as the service's string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Success => "SUCCESS",
            JobStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned result data plus the client that fetches its artifacts.
#[derive(Debug, Clone)]
struct ResultContext {
    result: JobResult,
    client: ArtifactClient,
}

/// Result of a document parsing job.
///
/// Constructed from a completed job's payload via [`ParseResult::builder`]
/// or the [`from_result`](ParseResult::from_result) /
/// [`from_value`](ParseResult::from_value) shorthands.
///
/// # Example
///
/// ```no_run
/// use docparse::ParseResult;
///
/// # fn main() -> docparse::Result<()> {
/// # let payload = serde_json::json!({});
/// let result = ParseResult::builder("job-123", "report.pdf")
///     .with_api_key("sk-...")
///     .build_from_value(payload)?;
///
/// println!("{}", result.markdown());
/// for name in result.image_names() {
///     let bytes = result.image_data_blocking(&name)?;
///     println!("{}: {} bytes", name, bytes.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// ID of the job that produced this result.
    pub job_id: String,

    /// Logical name of the parsed source file. Not required to exist on
    /// disk.
    pub file_name: String,

    context: ResultContext,
}

/// Builder for [`ParseResult`].
#[derive(Debug)]
pub struct ParseResultBuilder {
    job_id: String,
    file_name: String,
    api_key: Option<String>,
    base_url: Option<String>,
    http: Option<reqwest::Client>,
}

impl ParseResultBuilder {
    /// Set the API key, overriding the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the service base URL, overriding the environment and default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Reuse an existing HTTP client instead of building a fresh one.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Wrap an already-validated [`JobResult`].
    ///
    /// The builder's job ID and file name overwrite the values embedded
    /// in the result, so the two always agree.
    pub fn build(self, mut result: JobResult) -> ParseResult {
        let ParseResultBuilder {
            job_id,
            file_name,
            api_key,
            base_url,
            http,
        } = self;

        result.job_id = job_id.clone();
        result.file_name = file_name.clone();

        let client = ArtifactClient::new(Config::resolve(api_key, base_url), http);

        ParseResult {
            job_id,
            file_name,
            context: ResultContext { result, client },
        }
    }

    /// Validate a raw job payload and wrap it.
    ///
    /// The builder's job ID and file name are injected into the mapping
    /// before validation. Fails with [`Error::Schema`](crate::Error::Schema)
    /// when the payload does not satisfy the result schema.
    pub fn build_from_value(self, mut payload: Value) -> Result<ParseResult> {
        if let Some(object) = payload.as_object_mut() {
            object.insert("file_name".to_string(), self.file_name.clone().into());
            object.insert("job_id".to_string(), self.job_id.clone().into());
        }

        let result: JobResult = serde_json::from_value(payload)?;
        Ok(self.build(result))
    }
}

impl ParseResult {
    /// Start building a result for the given job identity.
    pub fn builder(job_id: impl Into<String>, file_name: impl Into<String>) -> ParseResultBuilder {
        ParseResultBuilder {
            job_id: job_id.into(),
            file_name: file_name.into(),
            api_key: None,
            base_url: None,
            http: None,
        }
    }

    /// Wrap a typed [`JobResult`] with default configuration.
    pub fn from_result(
        job_id: impl Into<String>,
        file_name: impl Into<String>,
        result: JobResult,
    ) -> Self {
        Self::builder(job_id, file_name).build(result)
    }

    /// Validate and wrap a raw job payload with default configuration.
    pub fn from_value(
        job_id: impl Into<String>,
        file_name: impl Into<String>,
        payload: Value,
    ) -> Result<Self> {
        Self::builder(job_id, file_name).build_from_value(payload)
    }

    fn result(&self) -> &JobResult {
        &self.context.result
    }

    /// Plain text of the whole document, pages joined by newline.
    pub fn text(&self) -> String {
        self.result()
            .pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Plain text split per page, blank pages included.
    pub fn page_texts(&self) -> Vec<String> {
        self.result()
            .pages
            .iter()
            .map(|page| page.text.clone())
            .collect()
    }

    /// Markdown of the whole document, pages joined by newline.
    pub fn markdown(&self) -> String {
        self.result()
            .pages
            .iter()
            .map(|page| page.md.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Markdown split per page, blank pages included.
    pub fn page_markdowns(&self) -> Vec<String> {
        self.result()
            .pages
            .iter()
            .map(|page| page.md.clone())
            .collect()
    }

    /// Structural JSON dump of the owned result.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.result())?)
    }

    /// Per-page structured data, in page order.
    ///
    /// Pages without structured data contribute nothing; the sequence is
    /// compacted, not padded.
    pub fn structured(&self) -> Vec<Map<String, Value>> {
        self.result()
            .pages
            .iter()
            .filter_map(|page| page.structured_data.clone())
            .collect()
    }

    /// Image descriptors across all pages, page order then intra-page
    /// order.
    ///
    /// Each descriptor is normalized to a JSON object carrying every
    /// field of the source entry plus a `"page"` field with the owning
    /// page's number. A bare-name entry becomes `{"name", "page"}`.
    pub fn images(&self) -> Vec<Map<String, Value>> {
        self.result()
            .pages
            .iter()
            .flat_map(|page| {
                page.images
                    .iter()
                    .map(move |entry| with_page(entry.record(), page.page))
            })
            .collect()
    }

    /// Names of all images, in the order of [`images`](Self::images).
    ///
    /// Entries without a resolvable name are silently skipped.
    pub fn image_names(&self) -> Vec<String> {
        self.images()
            .iter()
            .filter_map(|record| record.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    /// Table references across all pages, normalized like
    /// [`images`](Self::images).
    pub fn tables(&self) -> Vec<Map<String, Value>> {
        self.named_records(|page| &page.tables)
    }

    /// Chart references across all pages, normalized like
    /// [`images`](Self::images).
    pub fn charts(&self) -> Vec<Map<String, Value>> {
        self.named_records(|page| &page.charts)
    }

    fn named_records<F>(&self, entries: F) -> Vec<Map<String, Value>>
    where
        F: Fn(&Page) -> &[NamedRef],
    {
        self.result()
            .pages
            .iter()
            .flat_map(|page| {
                entries(page)
                    .iter()
                    .map(move |entry| with_page(entry.record(), page.page))
            })
            .collect()
    }

    /// The pages of the document, unmodified.
    pub fn pages(&self) -> &[Page] {
        &self.result().pages
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.result().pages.len()
    }

    /// Usage metadata for the job.
    pub fn metadata(&self) -> &JobMetadata {
        &self.result().job_metadata
    }

    /// Terminal status of the job.
    ///
    /// Results are wrapped only once a job has reached a terminal state,
    /// so a result without an error message reports success; the
    /// completion flag is not consulted.
    pub fn status(&self) -> JobStatus {
        if self.result().error.is_some() {
            JobStatus::Error
        } else {
            JobStatus::Success
        }
    }

    /// Fetch the binary payload of a named image.
    pub async fn image_data(&self, image_name: &str) -> Result<Bytes> {
        self.context.client.image(&self.job_id, image_name).await
    }

    /// Blocking variant of [`image_data`](Self::image_data).
    pub fn image_data_blocking(&self, image_name: &str) -> Result<Bytes> {
        blocking::run(self.image_data(image_name))?
    }

    /// Fetch the whole-document PDF rendition.
    pub async fn pdf_data(&self) -> Result<Bytes> {
        self.context.client.pdf(&self.job_id).await
    }

    /// Blocking variant of [`pdf_data`](Self::pdf_data).
    pub fn pdf_data_blocking(&self) -> Result<Bytes> {
        blocking::run(self.pdf_data())?
    }

    /// Fetch the whole-document spreadsheet rendition.
    pub async fn xlsx_data(&self) -> Result<Bytes> {
        self.context.client.xlsx(&self.job_id).await
    }

    /// Blocking variant of [`xlsx_data`](Self::xlsx_data).
    pub fn xlsx_data_blocking(&self) -> Result<Bytes> {
        blocking::run(self.xlsx_data())?
    }

    /// Fetch one image and write it to `<output_dir>/<image_name>`.
    ///
    /// Missing directories are created; an existing file is overwritten.
    /// The image name is used as the file name verbatim, so callers must
    /// ensure it is filesystem-safe.
    pub async fn save_image(
        &self,
        image_name: &str,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let data = self.image_data(image_name).await?;

        let dir = output_dir.as_ref();
        fs::create_dir_all(dir).await?;

        let path = dir.join(image_name);
        fs::write(&path, &data).await?;
        log::debug!(
            "ParseResult: wrote {} bytes to {}",
            data.len(),
            path.display()
        );

        Ok(path)
    }

    /// Blocking variant of [`save_image`](Self::save_image).
    pub fn save_image_blocking(
        &self,
        image_name: &str,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        blocking::run(self.save_image(image_name, output_dir))?
    }

    /// Fetch and save every image, in [`image_names`](Self::image_names)
    /// order.
    ///
    /// Images are fetched sequentially, one completion before the next
    /// request. A failure part-way through aborts the remaining saves
    /// and propagates; files already written stay on disk.
    pub async fn save_all_images(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = output_dir.as_ref();
        let mut saved = Vec::new();

        for name in self.image_names() {
            saved.push(self.save_image(&name, dir).await?);
        }

        Ok(saved)
    }

    /// Blocking variant of [`save_all_images`](Self::save_all_images).
    pub fn save_all_images_blocking(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        blocking::run(self.save_all_images(output_dir))?
    }
}

fn with_page(mut record: Map<String, Value>, page: u32) -> Map<String, Value> {
    record.insert("page".to_string(), page.into());
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(number: u32, text: &str, md: &str) -> Value {
        json!({
            "page": number,
            "text": text,
            "md": md,
            "status": "OK",
            "width": 612,
            "height": 792,
            "triggeredAutoMode": false,
            "parsingMode": "fast",
            "noStructuredContent": true,
            "noTextContent": text.is_empty()
        })
    }

    fn payload(pages: Vec<Value>) -> Value {
        json!({
            "pages": pages,
            "job_metadata": {
                "credits_used": 3,
                "job_pages": 2,
                "job_auto_mode_triggered_pages": 0,
                "job_is_cache_hit": false
            },
            "file_name": "embedded.pdf",
            "job_id": "embedded-id",
            "is_done": true
        })
    }

    fn result_with(pages: Vec<Value>) -> ParseResult {
        ParseResult::from_value("job-1", "report.pdf", payload(pages)).unwrap()
    }

    #[test]
    fn test_identity_overrides_payload() {
        let result = result_with(vec![page(1, "a", "# a")]);

        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.file_name, "report.pdf");

        let json = result.to_json().unwrap();
        assert_eq!(json["job_id"], json!("job-1"));
        assert_eq!(json["file_name"], json!("report.pdf"));
    }

    #[test]
    fn test_identity_overrides_typed_result() {
        let typed: JobResult = serde_json::from_value(payload(vec![page(1, "a", "# a")])).unwrap();
        let result = ParseResult::from_result("job-2", "other.pdf", typed);

        assert_eq!(result.to_json().unwrap()["job_id"], json!("job-2"));
        assert_eq!(result.to_json().unwrap()["file_name"], json!("other.pdf"));
    }

    #[test]
    fn test_invalid_payload_fails_construction() {
        let result = ParseResult::from_value("job-1", "report.pdf", json!({"pages": "nope"}));
        assert!(matches!(result, Err(crate::Error::Schema(_))));
    }

    #[test]
    fn test_non_object_payload_fails_construction() {
        let result = ParseResult::from_value("job-1", "report.pdf", json!([1, 2]));
        assert!(result.is_err());
    }

    #[test]
    fn test_text_joins_pages() {
        let result = result_with(vec![page(1, "first", "# f"), page(2, "", ""), page(3, "third", "# t")]);

        assert_eq!(result.text(), "first\n\nthird");
        assert_eq!(result.page_texts(), vec!["first", "", "third"]);
    }

    #[test]
    fn test_markdown_joins_pages() {
        let result = result_with(vec![page(1, "a", "# a"), page(2, "b", "# b")]);

        assert_eq!(result.markdown(), "# a\n# b");
        assert_eq!(result.page_markdowns(), vec!["# a", "# b"]);
    }

    #[test]
    fn test_status_follows_error_field() {
        let result = result_with(vec![page(1, "a", "# a")]);
        assert_eq!(result.status(), JobStatus::Success);
        assert_eq!(result.status().as_str(), "SUCCESS");

        let mut value = payload(vec![page(1, "a", "# a")]);
        value
            .as_object_mut()
            .unwrap()
            .insert("error".to_string(), json!("boom"));
        let failed = ParseResult::from_value("job-1", "report.pdf", value).unwrap();

        assert_eq!(failed.status(), JobStatus::Error);
        assert_eq!(failed.status().to_string(), "ERROR");
    }

    #[test]
    fn test_structured_skips_pages_without_data() {
        let mut with_data = page(2, "b", "# b");
        with_data
            .as_object_mut()
            .unwrap()
            .insert("structuredData".to_string(), json!({"a": 1}));

        let result = result_with(vec![page(1, "a", "# a"), with_data]);
        let structured = result.structured();

        assert_eq!(structured.len(), 1);
        assert_eq!(structured[0]["a"], json!(1));
    }

    #[test]
    fn test_images_normalize_bare_names() {
        let mut second = page(2, "b", "# b");
        second
            .as_object_mut()
            .unwrap()
            .insert("images".to_string(), json!(["img1.png"]));

        let result = result_with(vec![page(1, "a", "# a"), second]);
        let images = result.images();

        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["name"], json!("img1.png"));
        assert_eq!(images[0]["page"], json!(2));
        assert_eq!(images[0].len(), 2);
    }

    #[test]
    fn test_images_keep_descriptor_fields_and_order() {
        let mut first = page(1, "a", "# a");
        first.as_object_mut().unwrap().insert(
            "images".to_string(),
            json!([{
                "name": "fig.png",
                "height": 10.0,
                "width": 20.0,
                "x": 1.0,
                "y": 2.0,
                "original_width": 200,
                "original_height": 100,
                "type": "image"
            }]),
        );
        let mut second = page(2, "b", "# b");
        second
            .as_object_mut()
            .unwrap()
            .insert("images".to_string(), json!(["shot.png"]));

        let result = result_with(vec![first, second]);
        let images = result.images();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["name"], json!("fig.png"));
        assert_eq!(images[0]["original_width"], json!(200));
        assert_eq!(images[0]["page"], json!(1));
        assert_eq!(images[1]["name"], json!("shot.png"));

        assert_eq!(result.image_names(), vec!["fig.png", "shot.png"]);
    }

    #[test]
    fn test_tables_and_charts_inject_page() {
        let mut first = page(1, "a", "# a");
        {
            let object = first.as_object_mut().unwrap();
            object.insert("tables".to_string(), json!(["table_0"]));
            object.insert(
                "charts".to_string(),
                json!([{"name": "chart_0", "kind": "line"}]),
            );
        }

        let result = result_with(vec![first]);

        let tables = result.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0]["name"], json!("table_0"));
        assert_eq!(tables[0]["page"], json!(1));

        let charts = result.charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0]["kind"], json!("line"));
        assert_eq!(charts[0]["page"], json!(1));
    }

    #[test]
    fn test_pages_and_metadata_pass_through() {
        let result = result_with(vec![page(1, "a", "# a"), page(2, "b", "# b")]);

        assert_eq!(result.page_count(), 2);
        assert_eq!(result.pages()[1].page, 2);
        assert_eq!(result.metadata().credits_used, 3);
        assert!(!result.metadata().job_is_cache_hit);
    }

    #[tokio::test]
    async fn test_blocking_variants_reject_async_context() {
        let result = result_with(vec![page(1, "a", "# a")]);

        assert!(matches!(
            result.pdf_data_blocking(),
            Err(crate::Error::Reentrancy)
        ));
        assert!(matches!(
            result.save_all_images_blocking("out"),
            Err(crate::Error::Reentrancy)
        ));
    }
}

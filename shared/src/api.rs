use crate::error::{RequestError, ValidationError};
use crate::models::{BatchResultItem, DetectionResult, VideoFrameResult};
use crate::mode::UploadMode;
use serde::Serialize;

/// Multipart field every upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Confidence reported when the detector did not send one.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Predict,
    ZipUpload,
    Video,
    GenerateReport,
    GenerateBatchReport,
    GenerateVideoReport,
    ReportPreview,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "/predict",
            Endpoint::ZipUpload => "/zip_upload",
            Endpoint::Video => "/video",
            Endpoint::GenerateReport => "/generate-report",
            Endpoint::GenerateBatchReport => "/generate-batch-report",
            Endpoint::GenerateVideoReport => "/generate-video-report",
            Endpoint::ReportPreview => "/report-preview",
        }
    }
}

impl UploadMode {
    pub fn endpoint(self) -> Endpoint {
        match self {
            UploadMode::Single => Endpoint::Predict,
            UploadMode::Zip => Endpoint::ZipUpload,
            UploadMode::Video => Endpoint::Video,
        }
    }
}

/// The three PDF reports the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Single,
    Batch,
    Video,
}

impl ReportKind {
    pub fn endpoint(self) -> Endpoint {
        match self {
            ReportKind::Single => Endpoint::GenerateReport,
            ReportKind::Batch => Endpoint::GenerateBatchReport,
            ReportKind::Video => Endpoint::GenerateVideoReport,
        }
    }

    pub(crate) fn subject(self) -> &'static str {
        match self {
            ReportKind::Single => "detection result",
            ReportKind::Batch => "batch results",
            ReportKind::Video => "video results",
        }
    }

    /// Prefix of the inline message when generation fails.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            ReportKind::Single => "Error generating report",
            ReportKind::Batch => "Error generating batch report",
            ReportKind::Video => "Error generating video report",
        }
    }

    fn fallback_stem(self) -> &'static str {
        match self {
            ReportKind::Single => "crack_report",
            ReportKind::Batch => "batch_report",
            ReportKind::Video => "video_report",
        }
    }
}

/// Body of `POST /generate-report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub crack_type: String,
    pub confidence: f64,
    pub image_base64: Option<String>,
}

impl ReportRequest {
    pub fn from_detection(result: &DetectionResult) -> Result<Self, ValidationError> {
        let crack_type = result
            .reportable_crack_type()
            .ok_or(ValidationError::NothingToReport(ReportKind::Single))?;

        Ok(Self {
            crack_type: crack_type.to_string(),
            confidence: result.confidence.unwrap_or(DEFAULT_CONFIDENCE),
            image_base64: result.annotated_image.clone(),
        })
    }
}

#[derive(Serialize)]
struct BulkReportRequest<'a, T> {
    results: &'a [T],
}

/// Everything needed to ask the server for one PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportJob {
    Single(ReportRequest),
    Batch(Vec<BatchResultItem>),
    Video(Vec<VideoFrameResult>),
}

impl ReportJob {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportJob::Single(_) => ReportKind::Single,
            ReportJob::Batch(_) => ReportKind::Batch,
            ReportJob::Video(_) => ReportKind::Video,
        }
    }

    /// JSON request body for the job's endpoint.
    pub fn body(&self) -> Result<String, RequestError> {
        let body = match self {
            ReportJob::Single(request) => serde_json::to_string(request)?,
            ReportJob::Batch(results) => serde_json::to_string(&BulkReportRequest { results })?,
            ReportJob::Video(results) => serde_json::to_string(&BulkReportRequest { results })?,
        };
        Ok(body)
    }
}

/// Filename from a `content-disposition` header, quoted or not.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("filename")
                .then(|| value.trim().trim_matches('"').to_string())
        })
        .filter(|name| !name.is_empty())
}

/// Name to save a downloaded report under. `now_ms` only matters when the
/// server did not name the file.
pub fn download_filename(header: Option<&str>, kind: ReportKind, now_ms: u64) -> String {
    header
        .and_then(filename_from_content_disposition)
        .unwrap_or_else(|| format!("{}_{}.pdf", kind.fallback_stem(), now_ms))
}

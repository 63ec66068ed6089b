use crate::error::RequestError;
use crate::mode::UploadMode;
use serde::{Deserialize, Serialize};

/// Shown instead of a table when a video produced no cracked frames.
pub const NO_VIDEO_CRACKS_MESSAGE: &str = "No cracks detected in any frames of the video";

/// Badge text for an image's crack status.
pub fn crack_status_label(cracked: bool) -> &'static str {
    if cracked { "Crack Detected" } else { "No Crack" }
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub cracked: bool,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub annotated_image: Option<String>,
    #[serde(default)]
    pub individual_bboxes: Vec<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl DetectionResult {
    /// Orientation shown for the result and used for its guidance; a clean
    /// image has none.
    pub fn displayed_orientation(&self) -> Option<&str> {
        self.orientation.as_deref().filter(|_| self.cracked)
    }

    /// Crack type a report can be generated for. Only cracked results with a
    /// known orientation qualify.
    pub fn reportable_crack_type(&self) -> Option<&str> {
        if self.cracked {
            self.orientation.as_deref().filter(|o| !o.is_empty())
        } else {
            None
        }
    }
}

/// One image of a `POST /zip_upload` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResultItem {
    #[serde(default)]
    pub input_image: Option<String>,
    pub cracked: bool,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub annotated_image: Option<String>,
    #[serde(default)]
    pub separate_bounding_box_images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl BatchResultItem {
    pub fn displayed_orientation(&self) -> Option<&str> {
        self.orientation.as_deref().filter(|_| self.cracked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrackStatus {
    Cracked,
    #[serde(rename = "Not Cracked")]
    NotCracked,
}

impl CrackStatus {
    pub fn label(self) -> &'static str {
        match self {
            CrackStatus::Cracked => "Cracked",
            CrackStatus::NotCracked => "Not Cracked",
        }
    }
}

/// One analysed frame of a `POST /video` response. The image fields are HTML
/// fragments produced by the server and are never rendered as markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFrameResult {
    #[serde(rename = "Frame #")]
    pub frame: u64,
    #[serde(rename = "Timestamp (s)")]
    pub timestamp_secs: f64,
    #[serde(rename = "Crack Status")]
    pub crack_status: CrackStatus,
    #[serde(rename = "Classification", default)]
    pub classification: Option<String>,
    #[serde(rename = "Full Annotated Image", default)]
    pub full_annotated_image: Option<String>,
    #[serde(rename = "Separate Bounding Boxes", default)]
    pub separate_bounding_boxes: Vec<String>,
}

impl VideoFrameResult {
    pub fn is_cracked(&self) -> bool {
        self.crack_status == CrackStatus::Cracked
    }

    /// Classification worth displaying; the server sends `N/A` for frames it
    /// could not classify.
    pub fn display_classification(&self) -> Option<&str> {
        self.classification
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "N/A")
    }
}

/// Response of `POST /report-preview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPreview {
    #[serde(default)]
    pub crack_type: Option<String>,
    pub severity: String,
    pub urgency: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub prevention: Vec<String>,
}

/// A decoded upload response, tagged by the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Single(DetectionResult),
    Zip(Vec<BatchResultItem>),
    Video(Vec<VideoFrameResult>),
}

impl UploadOutcome {
    pub fn decode(mode: UploadMode, body: &str) -> Result<Self, RequestError> {
        let outcome = match mode {
            UploadMode::Single => UploadOutcome::Single(serde_json::from_str(body)?),
            UploadMode::Zip => UploadOutcome::Zip(serde_json::from_str(body)?),
            UploadMode::Video => UploadOutcome::Video(serde_json::from_str(body)?),
        };
        Ok(outcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub cracked: usize,
    pub clean: usize,
}

impl BatchSummary {
    pub fn of(items: &[BatchResultItem]) -> Self {
        let cracked = items.iter().filter(|item| item.cracked).count();
        Self {
            total: items.len(),
            cracked,
            clean: items.len() - cracked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSummary {
    pub total: usize,
    pub cracked: usize,
}

impl VideoSummary {
    pub fn of(frames: &[VideoFrameResult]) -> Self {
        Self {
            total: frames.len(),
            cracked: frames.iter().filter(|f| f.is_cracked()).count(),
        }
    }

    /// Share of cracked frames as a percentage with one decimal, `0` when
    /// nothing was analysed.
    pub fn detection_rate(&self) -> String {
        if self.total == 0 {
            return "0".into();
        }
        format!("{:.1}", self.cracked as f64 / self.total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_uncracked_prediction_with_nulls() {
        let body = json!({
            "cracked": false,
            "orientation": null,
            "confidence": 0.0,
            "annotated_image": null,
            "individual_bboxes": []
        })
        .to_string();

        let UploadOutcome::Single(result) = UploadOutcome::decode(UploadMode::Single, &body).unwrap()
        else {
            panic!("expected single outcome");
        };
        assert!(!result.cracked);
        assert_eq!(result.orientation, None);
        assert_eq!(result.reportable_crack_type(), None);
    }

    #[test]
    fn decodes_video_frames_with_server_field_names() {
        let body = json!([{
            "Frame #": 12,
            "Timestamp (s)": 0.4,
            "Crack Status": "Cracked",
            "Classification": "Vertical Crack",
            "Full Annotated Image": "<a href=\"data:image/png;base64,AA\"><img src=\"data:image/png;base64,AA\" width=\"100\"/></a>",
            "Separate Bounding Boxes": []
        }])
        .to_string();

        let UploadOutcome::Video(frames) = UploadOutcome::decode(UploadMode::Video, &body).unwrap()
        else {
            panic!("expected video outcome");
        };
        assert_eq!(frames[0].frame, 12);
        assert!(frames[0].is_cracked());
        assert_eq!(frames[0].display_classification(), Some("Vertical Crack"));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let err = UploadOutcome::decode(UploadMode::Zip, "{\"cracked\": true}").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn clean_rows_show_no_orientation() {
        let item: BatchResultItem = serde_json::from_value(json!({
            "cracked": false,
            "orientation": "Vertical Crack"
        }))
        .unwrap();
        assert_eq!(item.displayed_orientation(), None);

        let result: DetectionResult = serde_json::from_value(json!({
            "cracked": false,
            "orientation": "Vertical Crack"
        }))
        .unwrap();
        assert_eq!(result.displayed_orientation(), None);

        let result = DetectionResult { cracked: true, ..result };
        assert_eq!(result.displayed_orientation(), Some("Vertical Crack"));
    }

    #[test]
    fn batch_item_without_filename_serializes_without_it() {
        let item: BatchResultItem = serde_json::from_value(json!({
            "input_image": "data:image/png;base64,AA",
            "cracked": false,
            "orientation": null,
            "annotated_image": null,
            "separate_bounding_box_images": []
        }))
        .unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("filename").is_none());
        assert_eq!(value["cracked"], json!(false));
    }

    #[test]
    fn not_available_classification_is_hidden() {
        let frame = VideoFrameResult {
            frame: 1,
            timestamp_secs: 0.03,
            crack_status: CrackStatus::NotCracked,
            classification: Some("N/A".into()),
            full_annotated_image: None,
            separate_bounding_boxes: vec![],
        };
        assert_eq!(frame.display_classification(), None);
        assert_eq!(frame.crack_status.label(), "Not Cracked");
    }

    #[test]
    fn video_detection_rate() {
        assert_eq!(VideoSummary::of(&[]).detection_rate(), "0");
        let summary = VideoSummary { total: 3, cracked: 2 };
        assert_eq!(summary.detection_rate(), "66.7");
    }
}

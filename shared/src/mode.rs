use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

const ZIP_EXTENSIONS: &[&str] = &[".zip"];
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov"];

/// Which kind of upload the user is preparing. Decides the accepted files,
/// the endpoint that receives them and the shape of the response.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    #[default]
    Single,
    Zip,
    Video,
}

impl UploadMode {
    pub fn accepts(self, file: &FileInfo) -> bool {
        match self {
            UploadMode::Single => file.is_image(),
            UploadMode::Zip => file.has_extension(ZIP_EXTENSIONS),
            UploadMode::Video => file.has_extension(VIDEO_EXTENSIONS),
        }
    }

    /// Category name used in validation messages.
    pub fn category(self) -> &'static str {
        match self {
            UploadMode::Single => "image",
            UploadMode::Zip => "ZIP",
            UploadMode::Video => "video",
        }
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_filter(self) -> &'static str {
        match self {
            UploadMode::Single => "image/*",
            UploadMode::Zip => ".zip",
            UploadMode::Video => ".mp4,.avi,.mov",
        }
    }

    pub(crate) fn staged_noun(self) -> &'static str {
        match self {
            UploadMode::Single => "an image",
            UploadMode::Zip => "a ZIP file",
            UploadMode::Video => "a video file",
        }
    }

    /// Generic message shown when the upload request for this mode fails.
    pub fn failure_message(self, base_url: &str) -> String {
        match self {
            UploadMode::Single => format!(
                "Failed to analyze image. Please make sure the API server is running on {}",
                base_url
            ),
            UploadMode::Zip => {
                "Failed to process ZIP file. Please make sure the API server is running.".into()
            }
            UploadMode::Video => {
                "Failed to process video file. Please make sure the API server is running.".into()
            }
        }
    }
}

/// How the file reached the page; only changes the wording of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

impl FileSource {
    pub fn verb(self) -> &'static str {
        match self {
            FileSource::Picker => "select",
            FileSource::Drop => "drop",
        }
    }
}

/// The parts of a browser `File` that validation looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub mime: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
        }
    }

    /// Images are the only files that get a local preview.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    fn has_extension(&self, extensions: &[&str]) -> bool {
        let name = self.name.to_ascii_lowercase();
        extensions.iter().any(|ext| name.ends_with(ext))
    }
}

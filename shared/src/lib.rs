pub mod api;
pub mod config;
pub mod error;
pub mod fragment;
pub mod knowledge;
pub mod mode;
pub mod models;
pub mod state;

pub use api::{Endpoint, ReportJob, ReportKind, ReportRequest};
pub use config::ClientConfig;
pub use error::{ConfigError, RequestError, ValidationError};
pub use mode::{FileInfo, FileSource, UploadMode};
pub use models::{
    BatchResultItem, BatchSummary, CrackStatus, DetectionResult, ReportPreview, UploadOutcome,
    VideoFrameResult, VideoSummary,
};
pub use state::{Action, AppState, Command, Modal, PendingKind, Results, RowKey, Ticket};

//! Upload and result state of the client as a single value with explicit
//! transitions.
//!
//! The UI feeds every user event and every finished request into
//! [`AppState::apply`]. Transitions never touch the network; when one needs
//! a request it returns a [`Command`] for the caller to execute, and the
//! caller reports back with the matching `*Finished`/`*Loaded` action and the
//! ticket it was given.

use crate::api::{ReportJob, ReportKind, ReportRequest};
use crate::config::ClientConfig;
use crate::error::{RequestError, ValidationError};
use crate::fragment::extract_image_src;
use crate::knowledge::{self, CrackKnowledge, UNPRECEDENTED_LABEL};
use crate::mode::{FileInfo, FileSource, UploadMode};
use crate::models::{
    BatchResultItem, DetectionResult, ReportPreview, UploadOutcome, VideoFrameResult,
};
use derive_more::Display;
use std::collections::HashSet;

/// Identifies one disclosure row: `zip_3` is the fourth row of a ZIP result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}_{}", mode, index)]
pub struct RowKey {
    pub mode: UploadMode,
    pub index: usize,
}

impl RowKey {
    pub fn new(mode: UploadMode, index: usize) -> Self {
        Self { mode, index }
    }
}

/// Id handed out with every command so late answers can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct Ticket(u64);

/// A file accepted for the current mode. `handle` owns whatever the platform
/// needs for the file, including its preview URL; dropping it releases them.
pub struct StagedFile<F> {
    pub info: FileInfo,
    pub handle: F,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Results {
    #[default]
    Empty,
    Single(DetectionResult),
    Zip(Vec<BatchResultItem>),
    Video(Vec<VideoFrameResult>),
}

impl Results {
    pub fn is_empty(&self) -> bool {
        matches!(self, Results::Empty)
    }
}

impl From<UploadOutcome> for Results {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Single(result) => Results::Single(result),
            UploadOutcome::Zip(items) => Results::Zip(items),
            UploadOutcome::Video(frames) => Results::Video(frames),
        }
    }
}

/// Enlarged image, with crack guidance when it is a full annotated image.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub image_src: String,
    pub details: Option<&'static CrackKnowledge>,
}

impl Modal {
    pub fn annotated(image_src: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            image_src: image_src.into(),
            details: Some(knowledge::lookup(label.unwrap_or(UNPRECEDENTED_LABEL))),
        }
    }

    pub fn crop(image_src: impl Into<String>) -> Self {
        Self {
            image_src: image_src.into(),
            details: None,
        }
    }

    /// Annotated modal for a server HTML fragment, if an image can be read
    /// out of it.
    pub fn annotated_fragment(fragment: &str, label: Option<&str>) -> Option<Self> {
        extract_image_src(fragment).map(|src| Self::annotated(src, label))
    }

    pub fn crop_fragment(fragment: &str) -> Option<Self> {
        extract_image_src(fragment).map(Self::crop)
    }
}

/// Report preview and errors for a single-image result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPanel {
    pub preview: Option<ReportPreview>,
    pub details_open: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Upload(UploadMode),
    Report(ReportKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: Ticket,
    kind: PendingKind,
    /// Set when the state the request was made for has been cleared. The
    /// request still holds the busy flag, but its answer is discarded.
    stale: bool,
}

pub enum Action<F> {
    SelectFile {
        info: FileInfo,
        handle: F,
        via: FileSource,
    },
    SwitchMode(UploadMode),
    Submit,
    UploadFinished {
        ticket: Ticket,
        outcome: Result<UploadOutcome, RequestError>,
    },
    ToggleRow(RowKey),
    OpenModal(Modal),
    CloseModal,
    PreviewLoaded {
        ticket: Ticket,
        result: Result<ReportPreview, RequestError>,
    },
    TogglePreviewDetails,
    RequestReport(ReportKind),
    ReportFinished {
        ticket: Ticket,
        result: Result<(), RequestError>,
    },
    Reset,
}

/// Work a transition asks the caller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Upload the staged file to the endpoint of `mode`.
    Upload { ticket: Ticket, mode: UploadMode },
    LoadPreview { ticket: Ticket, crack_type: String },
    GenerateReport { ticket: Ticket, job: ReportJob },
}

pub struct AppState<F> {
    api_base_url: String,
    mode: UploadMode,
    staged: Option<StagedFile<F>>,
    results: Results,
    /// Ticket of the upload whose answer is in `results`.
    shown: Option<Ticket>,
    error: Option<String>,
    expanded: HashSet<RowKey>,
    modal: Option<Modal>,
    report: ReportPanel,
    pending: Option<Pending>,
    last_ticket: u64,
}

impl<F> Default for AppState<F> {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl<F> AppState<F> {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_base_url: config.base_url().to_string(),
            mode: UploadMode::default(),
            staged: None,
            results: Results::Empty,
            shown: None,
            error: None,
            expanded: HashSet::new(),
            modal: None,
            report: ReportPanel::default(),
            pending: None,
            last_ticket: 0,
        }
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn staged(&self) -> Option<&StagedFile<F>> {
        self.staged.as_ref()
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn report(&self) -> &ReportPanel {
        &self.report
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingKind> {
        self.pending.map(|p| p.kind)
    }

    pub fn is_expanded(&self, key: RowKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Single-image result the report panel belongs to: only cracked results
    /// get one, whatever mode is selected while they are shown.
    pub fn report_target(&self) -> Option<&DetectionResult> {
        match &self.results {
            Results::Single(result) if result.cracked => Some(result),
            _ => None,
        }
    }

    /// Whether there is anything a reset would clear.
    pub fn has_content(&self) -> bool {
        self.staged.is_some() || !self.results.is_empty()
    }

    pub fn apply(&mut self, action: Action<F>) -> Option<Command> {
        match action {
            Action::SelectFile { info, handle, via } => {
                self.select_file(info, handle, via);
                None
            }
            Action::SwitchMode(mode) => {
                self.switch_mode(mode);
                None
            }
            Action::Submit => self.submit(),
            Action::UploadFinished { ticket, outcome } => self.upload_finished(ticket, outcome),
            Action::ToggleRow(key) => {
                if !self.expanded.remove(&key) {
                    self.expanded.insert(key);
                }
                None
            }
            Action::OpenModal(modal) => {
                self.modal = Some(modal);
                None
            }
            Action::CloseModal => {
                self.modal = None;
                None
            }
            Action::PreviewLoaded { ticket, result } => {
                self.preview_loaded(ticket, result);
                None
            }
            Action::TogglePreviewDetails => {
                self.report.details_open = !self.report.details_open;
                None
            }
            Action::RequestReport(kind) => self.request_report(kind),
            Action::ReportFinished { ticket, result } => {
                self.report_finished(ticket, result);
                None
            }
            Action::Reset => {
                self.clear_stage();
                self.mode = UploadMode::Single;
                self.modal = None;
                None
            }
        }
    }

    fn select_file(&mut self, info: FileInfo, handle: F, via: FileSource) {
        if !self.mode.accepts(&info) {
            log::warn!("Rejected {} for {} upload", info.name, self.mode);
            self.error = Some(
                ValidationError::WrongFileType {
                    mode: self.mode,
                    via,
                }
                .to_string(),
            );
            return;
        }

        log::debug!("Staged {} for {} upload", info.name, self.mode);
        self.clear_stage();
        self.staged = Some(StagedFile { info, handle });
    }

    fn switch_mode(&mut self, mode: UploadMode) {
        if mode == self.mode {
            return;
        }
        let incompatible = self
            .staged
            .as_ref()
            .is_some_and(|staged| !mode.accepts(&staged.info));
        if incompatible {
            log::debug!("Clearing staged file incompatible with {} mode", mode);
            self.clear_stage();
        }
        self.mode = mode;
    }

    /// Drops the staged file, results, errors and report state, and detaches
    /// any request in flight from them.
    fn clear_stage(&mut self) {
        self.staged = None;
        self.results = Results::Empty;
        self.shown = None;
        self.error = None;
        self.report = ReportPanel::default();
        if let Some(pending) = self.pending.as_mut() {
            pending.stale = true;
        }
    }

    fn issue_ticket(&mut self, kind: PendingKind) -> Ticket {
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.pending = Some(Pending {
            ticket,
            kind,
            stale: false,
        });
        ticket
    }

    /// Clears the pending request if `ticket` is the one in flight; returns it
    /// unless its answer is no longer wanted.
    fn settle(&mut self, ticket: Ticket) -> Option<PendingKind> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                if pending.stale {
                    log::debug!("Discarding stale answer for ticket {}", ticket);
                    None
                } else {
                    Some(pending.kind)
                }
            }
            _ => {
                log::debug!("Ignoring answer for unknown ticket {}", ticket);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Command> {
        if self.is_busy() {
            log::debug!("Submit ignored while a request is in flight");
            return None;
        }

        let Some(staged) = self.staged.as_ref() else {
            self.error = Some(ValidationError::NothingStaged(self.mode).to_string());
            return None;
        };
        if !self.mode.accepts(&staged.info) {
            self.error = Some(
                ValidationError::WrongFileType {
                    mode: self.mode,
                    via: FileSource::Picker,
                }
                .to_string(),
            );
            return None;
        }

        let mode = self.mode;
        self.error = None;
        let ticket = self.issue_ticket(PendingKind::Upload(mode));
        log::info!("Submitting {} upload (ticket {})", mode, ticket);
        Some(Command::Upload { ticket, mode })
    }

    fn upload_finished(
        &mut self,
        ticket: Ticket,
        outcome: Result<UploadOutcome, RequestError>,
    ) -> Option<Command> {
        let PendingKind::Upload(mode) = self.settle(ticket)? else {
            return None;
        };

        match outcome {
            Ok(outcome) => {
                let preview = match &outcome {
                    UploadOutcome::Single(result) => {
                        result.reportable_crack_type().map(str::to_string)
                    }
                    _ => None,
                };
                self.results = outcome.into();
                self.shown = Some(ticket);
                self.error = None;
                self.report = ReportPanel::default();

                preview.map(|crack_type| Command::LoadPreview { ticket, crack_type })
            }
            Err(e) => {
                log::error!("{} upload failed: {}", mode, e);
                self.error = Some(mode.failure_message(&self.api_base_url));
                None
            }
        }
    }

    fn preview_loaded(&mut self, ticket: Ticket, result: Result<ReportPreview, RequestError>) {
        if self.shown != Some(ticket) {
            log::debug!("Ignoring report preview for ticket {}", ticket);
            return;
        }
        match result {
            Ok(preview) => self.report.preview = Some(preview),
            Err(e) => {
                log::error!("Report preview failed: {}", e);
                self.report.error = Some(format!("Error loading preview: {}", e));
            }
        }
    }

    fn request_report(&mut self, kind: ReportKind) -> Option<Command> {
        if self.is_busy() {
            log::debug!("Report request ignored while a request is in flight");
            return None;
        }

        let job = match (kind, &self.results) {
            (ReportKind::Single, Results::Single(result)) => {
                ReportRequest::from_detection(result).map(ReportJob::Single)
            }
            (ReportKind::Batch, Results::Zip(items)) if !items.is_empty() => {
                Ok(ReportJob::Batch(items.clone()))
            }
            (ReportKind::Video, Results::Video(frames)) if !frames.is_empty() => {
                Ok(ReportJob::Video(frames.clone()))
            }
            _ => Err(ValidationError::NothingToReport(kind)),
        };

        match job {
            Ok(job) => {
                self.set_report_error(kind, None);
                let ticket = self.issue_ticket(PendingKind::Report(kind));
                log::info!("Requesting {:?} report (ticket {})", kind, ticket);
                Some(Command::GenerateReport { ticket, job })
            }
            Err(e) => {
                self.set_report_error(kind, Some(e.to_string()));
                None
            }
        }
    }

    fn report_finished(&mut self, ticket: Ticket, result: Result<(), RequestError>) {
        let Some(PendingKind::Report(kind)) = self.settle(ticket) else {
            return;
        };
        match result {
            Ok(()) => log::info!("{:?} report downloaded", kind),
            Err(e) => {
                log::error!("{:?} report failed: {}", kind, e);
                self.set_report_error(kind, Some(format!("{}: {}", kind.failure_prefix(), e)));
            }
        }
    }

    /// Single-image reports show errors in their own panel; bulk reports use
    /// the page error line.
    fn set_report_error(&mut self, kind: ReportKind, message: Option<String>) {
        match kind {
            ReportKind::Single => self.report.error = message,
            ReportKind::Batch | ReportKind::Video => self.error = message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that counts how often it was released.
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn select(state: &mut AppState<Tracked>, name: &str, mime: &str) -> Rc<Cell<usize>> {
        let released = Rc::new(Cell::new(0));
        state.apply(Action::SelectFile {
            info: FileInfo::new(name, mime),
            handle: Tracked(released.clone()),
            via: FileSource::Picker,
        });
        released
    }

    fn cracked(orientation: &str) -> DetectionResult {
        DetectionResult {
            cracked: true,
            orientation: Some(orientation.into()),
            annotated_image: Some("data:image/png;base64,AA".into()),
            individual_bboxes: vec!["data:image/png;base64,BB".into()],
            confidence: Some(0.93),
        }
    }

    fn submit(state: &mut AppState<Tracked>) -> Ticket {
        match state.apply(Action::Submit) {
            Some(Command::Upload { ticket, .. }) => ticket,
            other => panic!("expected upload command, got {:?}", other),
        }
    }

    #[test]
    fn rejected_file_leaves_state_and_releases_handle() {
        let mut state = AppState::default();
        let first = select(&mut state, "photo.jpg", "image/jpeg");
        let rejected = select(&mut state, "notes.txt", "text/plain");

        assert_eq!(rejected.get(), 1);
        assert_eq!(first.get(), 0);
        assert_eq!(state.staged().unwrap().info.name, "photo.jpg");
        assert_eq!(state.error(), Some("Please select a valid image file"));
    }

    #[test]
    fn new_selection_supersedes_and_releases_previous() {
        let mut state = AppState::default();
        let first = select(&mut state, "a.png", "image/png");
        let second = select(&mut state, "b.png", "image/png");

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn selection_clears_previous_results() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Vertical Crack"))),
        });
        assert!(!state.results().is_empty());

        select(&mut state, "b.png", "image/png");
        assert!(state.results().is_empty());
        assert_eq!(state.report(), &ReportPanel::default());
    }

    #[test]
    fn incompatible_mode_switch_clears_everything() {
        let mut state = AppState::default();
        let released = select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Vertical Crack"))),
        });
        state.apply(Action::PreviewLoaded {
            ticket,
            result: Err(RequestError::Status(500)),
        });
        state.apply(Action::RequestReport(ReportKind::Batch));
        assert!(!state.results().is_empty());
        assert!(state.report().error.is_some());
        assert!(state.error().is_some());

        state.apply(Action::SwitchMode(UploadMode::Zip));

        assert_eq!(released.get(), 1);
        assert!(state.staged().is_none());
        assert!(state.results().is_empty());
        assert_eq!(state.report(), &ReportPanel::default());
        assert_eq!(state.error(), None);
        assert_eq!(state.mode(), UploadMode::Zip);
    }

    #[test]
    fn compatible_mode_switch_keeps_stage_and_report() {
        let mut state = AppState::default();
        let released = select(&mut state, "scan.zip", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Vertical Crack"))),
        });
        state.apply(Action::SwitchMode(UploadMode::Zip));

        assert_eq!(released.get(), 0);
        assert_eq!(state.staged().unwrap().info.name, "scan.zip");
        assert_eq!(state.mode(), UploadMode::Zip);
        assert!(matches!(state.results(), Results::Single(_)));
        assert!(state.report_target().is_some());
    }

    #[test]
    fn report_target_needs_a_cracked_single_result() {
        let mut state = AppState::default();
        assert!(state.report_target().is_none());

        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(DetectionResult {
                cracked: false,
                orientation: None,
                annotated_image: None,
                individual_bboxes: vec![],
                confidence: None,
            })),
        });
        assert!(state.report_target().is_none());
    }

    #[test]
    fn submit_without_file_is_a_validation_error() {
        let mut state: AppState<Tracked> = AppState::default();
        state.apply(Action::SwitchMode(UploadMode::Zip));

        assert_eq!(state.apply(Action::Submit), None);
        assert_eq!(state.error(), Some("Please select a ZIP file first"));
        assert!(!state.is_busy());
    }

    #[test]
    fn busy_state_blocks_second_submit() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        submit(&mut state);

        assert!(state.is_busy());
        assert_eq!(state.apply(Action::Submit), None);
        assert_eq!(state.apply(Action::RequestReport(ReportKind::Single)), None);
    }

    #[test]
    fn failed_upload_shows_mode_message_and_frees_busy_flag() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Err(RequestError::Status(500)),
        });

        assert!(!state.is_busy());
        assert_eq!(
            state.error(),
            Some(
                "Failed to analyze image. Please make sure the API server is running on http://localhost:8000"
            )
        );
    }

    #[test]
    fn answers_after_reset_are_discarded() {
        let mut state = AppState::default();
        let released = select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::Reset);
        assert_eq!(released.get(), 1);
        assert!(state.is_busy());

        select(&mut state, "b.png", "image/png");
        assert_eq!(state.apply(Action::Submit), None);

        let command = state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Horizontal Crack"))),
        });
        assert_eq!(command, None);
        assert!(state.results().is_empty());
        assert!(!state.is_busy());
        assert!(matches!(state.apply(Action::Submit), Some(Command::Upload { .. })));
    }

    #[test]
    fn answers_after_stage_change_are_discarded() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        select(&mut state, "b.png", "image/png");
        assert!(state.is_busy());

        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Horizontal Crack"))),
        });
        assert!(state.results().is_empty());
        assert!(!state.is_busy());
        assert_eq!(state.staged().unwrap().info.name, "b.png");
    }

    #[test]
    fn reset_returns_to_single_mode_but_keeps_disclosures() {
        let mut state: AppState<Tracked> = AppState::default();
        let key = RowKey::new(UploadMode::Zip, 2);
        state.apply(Action::SwitchMode(UploadMode::Zip));
        state.apply(Action::ToggleRow(key));
        state.apply(Action::OpenModal(Modal::crop("data:image/png;base64,AA")));
        state.apply(Action::Reset);

        assert_eq!(state.mode(), UploadMode::Single);
        assert!(state.modal().is_none());
        assert!(state.is_expanded(key));
    }

    #[test]
    fn toggling_twice_restores_and_keys_are_independent() {
        let mut state: AppState<Tracked> = AppState::default();
        let zip0 = RowKey::new(UploadMode::Zip, 0);
        let video0 = RowKey::new(UploadMode::Video, 0);

        state.apply(Action::ToggleRow(zip0));
        assert!(state.is_expanded(zip0));
        assert!(!state.is_expanded(video0));

        state.apply(Action::ToggleRow(zip0));
        assert!(!state.is_expanded(zip0));
        assert_eq!(zip0.to_string(), "zip_0");
    }

    #[test]
    fn cracked_single_result_requests_preview() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        let command = state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Horizontal Crack"))),
        });
        assert_eq!(
            command,
            Some(Command::LoadPreview {
                ticket,
                crack_type: "Horizontal Crack".into()
            })
        );

        state.apply(Action::PreviewLoaded {
            ticket,
            result: Err(RequestError::Transport("offline".into())),
        });
        assert_eq!(
            state.report().error.as_deref(),
            Some("Error loading preview: Network error: offline")
        );
        assert!(!state.report().details_open);
        state.apply(Action::TogglePreviewDetails);
        assert!(state.report().details_open);
    }

    #[test]
    fn preview_for_replaced_result_is_ignored() {
        let mut state = AppState::default();
        select(&mut state, "a.png", "image/png");
        let ticket = submit(&mut state);
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Single(cracked("Vertical Crack"))),
        });
        select(&mut state, "b.png", "image/png");

        state.apply(Action::PreviewLoaded {
            ticket,
            result: Ok(ReportPreview {
                crack_type: None,
                severity: "High".into(),
                urgency: "Soon".into(),
                causes: vec![],
                solutions: vec![],
                prevention: vec![],
            }),
        });
        assert_eq!(state.report().preview, None);
    }

    #[test]
    fn bulk_report_needs_results() {
        let mut state: AppState<Tracked> = AppState::default();
        assert_eq!(state.apply(Action::RequestReport(ReportKind::Video)), None);
        assert_eq!(
            state.error(),
            Some("No video results available for report generation")
        );
    }

    #[test]
    fn report_round_trip_and_failure_message() {
        let mut state = AppState::default();
        state.apply(Action::SwitchMode(UploadMode::Zip));
        select(&mut state, "batch.zip", "application/zip");
        let ticket = submit(&mut state);
        let item = BatchResultItem {
            input_image: None,
            cracked: true,
            orientation: Some("Vertical Crack".into()),
            annotated_image: None,
            separate_bounding_box_images: vec![],
            filename: None,
        };
        state.apply(Action::UploadFinished {
            ticket,
            outcome: Ok(UploadOutcome::Zip(vec![item.clone()])),
        });

        let Some(Command::GenerateReport { ticket, job }) =
            state.apply(Action::RequestReport(ReportKind::Batch))
        else {
            panic!("expected report command");
        };
        assert_eq!(job, ReportJob::Batch(vec![item]));
        assert_eq!(state.pending(), Some(PendingKind::Report(ReportKind::Batch)));

        state.apply(Action::ReportFinished {
            ticket,
            result: Err(RequestError::Status(500)),
        });
        assert!(!state.is_busy());
        assert_eq!(
            state.error(),
            Some("Error generating batch report: HTTP error! status: 500")
        );
    }

    #[test]
    fn annotated_modal_looks_up_guidance() {
        let modal = Modal::annotated("data:image/png;base64,AA", Some("Vertical Crack"));
        assert_eq!(modal.details.unwrap().name, "Vertical Crack");

        let modal = Modal::annotated("data:image/png;base64,AA", None);
        assert_eq!(modal.details.unwrap().name, "Unprecedented Crack");

        assert_eq!(Modal::crop_fragment("<b>no image</b>"), None);
    }
}

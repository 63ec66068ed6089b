//! End-to-end flows through the client state with canned server answers.

use serde_json::json;
use shared::api::download_filename;
use shared::knowledge::CategoryColor;
use shared::models::{NO_VIDEO_CRACKS_MESSAGE, crack_status_label};
use shared::{
    Action, AppState, BatchSummary, Command, FileInfo, FileSource, ReportKind, Results, RowKey,
    Ticket, UploadMode, UploadOutcome,
};

fn stage(state: &mut AppState<()>, mode: UploadMode, name: &str, mime: &str) {
    state.apply(Action::SwitchMode(mode));
    state.apply(Action::SelectFile {
        info: FileInfo::new(name, mime),
        handle: (),
        via: FileSource::Drop,
    });
    assert_eq!(state.error(), None, "staging {name} failed");
}

fn submit(state: &mut AppState<()>, expected: UploadMode) -> Ticket {
    match state.apply(Action::Submit) {
        Some(Command::Upload { ticket, mode }) => {
            assert_eq!(mode, expected);
            assert_eq!(mode.endpoint(), expected.endpoint());
            ticket
        }
        other => panic!("expected upload command, got {:?}", other),
    }
}

fn answer(
    state: &mut AppState<()>,
    ticket: Ticket,
    mode: UploadMode,
    body: serde_json::Value,
) -> Option<Command> {
    let outcome = UploadOutcome::decode(mode, &body.to_string());
    state.apply(Action::UploadFinished { ticket, outcome })
}

#[test]
fn single_image_with_horizontal_crack() {
    let mut state = AppState::default();
    stage(&mut state, UploadMode::Single, "photo.jpg", "image/jpeg");
    let ticket = submit(&mut state, UploadMode::Single);

    let command = answer(
        &mut state,
        ticket,
        UploadMode::Single,
        json!({
            "cracked": true,
            "orientation": "Horizontal Crack",
            "annotated_image": "data:image/png;base64,ANNOTATED",
            "individual_bboxes": ["data:image/png;base64,a", "data:image/png;base64,b"]
        }),
    );

    let Results::Single(result) = state.results() else {
        panic!("expected single result");
    };
    assert_eq!(crack_status_label(result.cracked), "Crack Detected");
    let orientation = result.orientation.as_deref().unwrap();
    assert_eq!(CategoryColor::for_label(orientation), CategoryColor::Red);
    assert_eq!(result.individual_bboxes.len(), 2);

    let key = RowKey::new(UploadMode::Single, 0);
    assert!(!state.is_expanded(key));
    state.apply(Action::ToggleRow(key));
    assert!(state.is_expanded(key));

    assert!(matches!(
        command,
        Some(Command::LoadPreview { crack_type, .. }) if crack_type == "Horizontal Crack"
    ));
}

#[test]
fn zip_batch_summary() {
    let mut state = AppState::default();
    stage(&mut state, UploadMode::Zip, "batch.zip", "application/zip");
    let ticket = submit(&mut state, UploadMode::Zip);

    let item = |cracked: bool| {
        let orientation = cracked.then_some("Vertical Crack");
        json!({
            "input_image": "data:image/png;base64,IN",
            "cracked": cracked,
            "orientation": orientation,
            "annotated_image": null,
            "separate_bounding_box_images": []
        })
    };
    let command = answer(
        &mut state,
        ticket,
        UploadMode::Zip,
        json!([item(true), item(false), item(true)]),
    );
    assert_eq!(command, None);

    let Results::Zip(items) = state.results() else {
        panic!("expected zip results");
    };
    let summary = BatchSummary::of(items);
    assert_eq!((summary.total, summary.cracked, summary.clean), (3, 2, 1));

    assert!(matches!(
        state.apply(Action::RequestReport(ReportKind::Batch)),
        Some(Command::GenerateReport { .. })
    ));
}

#[test]
fn empty_video_answer_differs_from_no_submission() {
    let mut state = AppState::default();
    stage(&mut state, UploadMode::Video, "clip.mov", "video/quicktime");
    assert_eq!(state.results(), &Results::Empty);

    let ticket = submit(&mut state, UploadMode::Video);
    answer(&mut state, ticket, UploadMode::Video, json!([]));

    assert_eq!(state.results(), &Results::Video(vec![]));
    assert_ne!(state.results(), &Results::Empty);
    assert_eq!(
        NO_VIDEO_CRACKS_MESSAGE,
        "No cracks detected in any frames of the video"
    );
}

#[test]
fn results_are_exclusive_across_modes() {
    let mut state = AppState::default();
    stage(&mut state, UploadMode::Single, "photo.jpg", "image/jpeg");
    let ticket = submit(&mut state, UploadMode::Single);
    answer(&mut state, ticket, UploadMode::Single, json!({ "cracked": false }));
    assert!(matches!(state.results(), Results::Single(_)));

    stage(&mut state, UploadMode::Video, "clip.mp4", "video/mp4");
    assert!(state.results().is_empty());

    let ticket = submit(&mut state, UploadMode::Video);
    answer(&mut state, ticket, UploadMode::Video, json!([]));
    assert!(matches!(state.results(), Results::Video(_)));
}

#[test]
fn submit_without_file_never_produces_a_request() {
    let mut state: AppState<()> = AppState::default();
    for mode in [UploadMode::Single, UploadMode::Zip, UploadMode::Video] {
        state.apply(Action::SwitchMode(mode));
        assert_eq!(state.apply(Action::Submit), None);
        assert!(state.error().is_some());
    }
}

#[test]
fn wrong_drop_keeps_previous_stage() {
    let mut state = AppState::default();
    stage(&mut state, UploadMode::Zip, "batch.zip", "application/zip");
    state.apply(Action::SelectFile {
        info: FileInfo::new("clip.mp4", "video/mp4"),
        handle: (),
        via: FileSource::Drop,
    });

    assert_eq!(state.error(), Some("Please drop a valid ZIP file"));
    assert_eq!(state.staged().unwrap().info.name, "batch.zip");
}

#[test]
fn report_download_uses_server_filename() {
    let header = r#"attachment; filename="report.pdf""#;
    assert_eq!(
        download_filename(Some(header), ReportKind::Single, 1_700_000_000_000),
        "report.pdf"
    );
}

use super::super::{Model, StagedUpload};
use super::super::Msg;
use super::utils::first_file;
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{
    Action, Command, FileInfo, FileSource, Modal, ReportKind, ReportPreview, RequestError, RowKey,
    Ticket, UploadMode, UploadOutcome,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

/// Runs the request a transition asked for and routes the answer back as a
/// message carrying the same ticket.
fn dispatch(model: &Model, ctx: &Context<Model>, command: Option<Command>) {
    let Some(command) = command else {
        return;
    };
    let link = ctx.link().clone();
    let config = model.config.clone();

    match command {
        Command::Upload { ticket, mode } => {
            let Some(file) = model.state.staged().map(|staged| staged.handle.file.clone()) else {
                log::error!("Upload {} issued without a staged file", ticket);
                link.send_message(Msg::UploadFinished(
                    ticket,
                    Err(RequestError::Transport("no file staged".into())),
                ));
                return;
            };
            spawn_local(async move {
                let outcome = api::upload(&config, mode, &file).await;
                link.send_message(Msg::UploadFinished(ticket, outcome));
            });
        }
        Command::LoadPreview { ticket, crack_type } => {
            spawn_local(async move {
                let result = api::report_preview(&config, &crack_type).await;
                link.send_message(Msg::PreviewLoaded(ticket, result));
            });
        }
        Command::GenerateReport { ticket, job } => {
            spawn_local(async move {
                let result = api::generate_report(&config, &job).await;
                link.send_message(Msg::ReportFinished(ticket, result));
            });
        }
    }
}

fn apply(model: &mut Model, ctx: &Context<Model>, action: Action<StagedUpload>) -> bool {
    let command = model.state.apply(action);
    dispatch(model, ctx, command);
    true
}

pub fn handle_file_chosen(
    model: &mut Model,
    ctx: &Context<Model>,
    file: GlooFile,
    via: FileSource,
) -> bool {
    let info = FileInfo::new(file.name(), file.raw_mime_type());
    let preview = info.is_image().then(|| ObjectUrl::from(file.clone()));

    apply(
        model,
        ctx,
        Action::SelectFile {
            info,
            handle: StagedUpload { file, preview },
            via,
        },
    )
}

pub fn handle_switch_mode(model: &mut Model, ctx: &Context<Model>, mode: UploadMode) -> bool {
    if model.state.mode() == mode {
        return false;
    }
    apply(model, ctx, Action::SwitchMode(mode))
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    apply(model, ctx, Action::Submit)
}

pub fn handle_reset(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.is_dragging = false;
    apply(model, ctx, Action::Reset)
}

pub fn handle_upload_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: Ticket,
    outcome: Result<UploadOutcome, RequestError>,
) -> bool {
    apply(model, ctx, Action::UploadFinished { ticket, outcome })
}

pub fn handle_preview_loaded(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: Ticket,
    result: Result<ReportPreview, RequestError>,
) -> bool {
    apply(model, ctx, Action::PreviewLoaded { ticket, result })
}

pub fn handle_report_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: Ticket,
    result: Result<(), RequestError>,
) -> bool {
    apply(model, ctx, Action::ReportFinished { ticket, result })
}

pub fn handle_toggle_row(model: &mut Model, ctx: &Context<Model>, key: RowKey) -> bool {
    apply(model, ctx, Action::ToggleRow(key))
}

pub fn handle_open_modal(model: &mut Model, ctx: &Context<Model>, modal: Modal) -> bool {
    apply(model, ctx, Action::OpenModal(modal))
}

pub fn handle_close_modal(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.state.modal().is_none() {
        return false;
    }
    apply(model, ctx, Action::CloseModal)
}

pub fn handle_toggle_preview_details(model: &mut Model, ctx: &Context<Model>) -> bool {
    apply(model, ctx, Action::TogglePreviewDetails)
}

pub fn handle_request_report(model: &mut Model, ctx: &Context<Model>, kind: ReportKind) -> bool {
    apply(model, ctx, Action::RequestReport(kind))
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    match file {
        Some(file) => handle_file_chosen(model, ctx, file, FileSource::Drop),
        None => {
            log::debug!("Drop contained no files");
            true
        }
    }
}

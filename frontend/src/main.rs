mod api;
mod components;
mod config;

use components::{handlers, header, modal, report_panel, results, sidebar, upload_section, utils};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{
    AppState, ClientConfig, FileSource, Modal, ReportKind, ReportPreview, RequestError, RowKey,
    Ticket, UploadMode, UploadOutcome,
};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, KeyboardEvent};
use yew::prelude::*;

// Models
/// The browser side of a staged file. Dropping it revokes the preview URL.
pub struct StagedUpload {
    file: GlooFile,
    preview: Option<ObjectUrl>,
}

// Yew msg components
pub enum Msg {
    // File operations
    FileChosen(GlooFile, FileSource),
    SwitchMode(UploadMode),
    Submit,
    Reset,

    // Server answers
    UploadFinished(Ticket, Result<UploadOutcome, RequestError>),
    PreviewLoaded(Ticket, Result<ReportPreview, RequestError>),
    ReportFinished(Ticket, Result<(), RequestError>),

    // Result views
    ToggleRow(RowKey),
    OpenModal(Modal),
    CloseModal,
    TogglePreviewDetails,
    RequestReport(ReportKind),

    // Input events
    SetDragging(bool),
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    state: AppState<StagedUpload>,
    config: ClientConfig,
    is_dragging: bool,
    keydown_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        log::info!("Using detection API at {}", config.base_url());

        let mut model = Self {
            state: AppState::new(&config),
            config,
            is_dragging: false,
            keydown_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    if key_event.key() == "Escape" {
                        link.send_message(Msg::CloseModal);
                    }
                }
            });
            model.keydown_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file, via) => handlers::handle_file_chosen(self, ctx, file, via),
            Msg::SwitchMode(mode) => handlers::handle_switch_mode(self, ctx, mode),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Reset => handlers::handle_reset(self, ctx),

            // Server answers
            Msg::UploadFinished(ticket, outcome) => {
                handlers::handle_upload_finished(self, ctx, ticket, outcome)
            }
            Msg::PreviewLoaded(ticket, result) => {
                handlers::handle_preview_loaded(self, ctx, ticket, result)
            }
            Msg::ReportFinished(ticket, result) => {
                handlers::handle_report_finished(self, ctx, ticket, result)
            }

            // Result views
            Msg::ToggleRow(key) => handlers::handle_toggle_row(self, ctx, key),
            Msg::OpenModal(modal) => handlers::handle_open_modal(self, ctx, modal),
            Msg::CloseModal => handlers::handle_close_modal(self, ctx),
            Msg::TogglePreviewDetails => handlers::handle_toggle_preview_details(self, ctx),
            Msg::RequestReport(kind) => handlers::handle_request_report(self, ctx, kind),

            // Input events
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <div class="layout">
                    { sidebar::render_sidebar(self.state.mode(), ctx.link()) }

                    <main class="main-content">
                        { upload_section::render_upload_section(self, ctx) }
                        { results::render_results(self, ctx) }
                        { report_panel::render_report_panel(self, ctx) }
                        { utils::render_reset_button(self, ctx) }
                    </main>
                </div>

                { modal::render_modal(self, ctx) }

                <footer class="app-footer">
                    <p>{"Crack Detection System"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}

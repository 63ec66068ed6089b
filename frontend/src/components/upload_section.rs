use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file, render_error_message};
use shared::{FileSource, PendingKind, UploadMode};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const FILE_INPUT_ID: &str = "file-input";

struct ModeCopy {
    icon: &'static str,
    heading: &'static str,
    instructions_title: &'static str,
    instructions: &'static str,
    drop_hint: &'static str,
    formats: &'static str,
    submit: &'static str,
    staged_kind: &'static str,
}

fn copy_for(mode: UploadMode) -> ModeCopy {
    match mode {
        UploadMode::Single => ModeCopy {
            icon: "fa-solid fa-camera",
            heading: "Upload Single Image",
            instructions_title: "Single Image Upload Instructions",
            instructions: "Upload a single image file (JPG, PNG, etc.) to detect and analyze structural cracks. \
                The system will identify crack presence, orientation, and provide detailed crack views.",
            drop_hint: "Drag and drop an image here, or click to select",
            formats: "Supports JPG, PNG, and other image formats",
            submit: "Analyze Image",
            staged_kind: "File",
        },
        UploadMode::Zip => ModeCopy {
            icon: "fa-solid fa-file-zipper",
            heading: "Upload ZIP File",
            instructions_title: "ZIP File Upload Instructions",
            instructions: "Upload a ZIP archive containing multiple image files for batch processing. \
                All images will be analyzed simultaneously for crack detection and classification.",
            drop_hint: "Drag and drop a ZIP file here, or click to select",
            formats: "Supports ZIP files containing images",
            submit: "Process ZIP",
            staged_kind: "ZIP Archive",
        },
        UploadMode::Video => ModeCopy {
            icon: "fa-solid fa-video",
            heading: "Upload Video File",
            instructions_title: "Video File Upload Instructions",
            instructions: "Upload a video file (MP4, AVI, MOV) to analyze frames for crack detection. \
                The system will process individual frames and provide timestamped crack analysis.",
            drop_hint: "Drag and drop a video file here, or click to select",
            formats: "Supports MP4, AVI, MOV formats",
            submit: "Process Video",
            staged_kind: "Video File",
        },
    }
}

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let mode = model.state.mode();
    let copy = copy_for(mode);

    html! {
        <div class={classes!("upload-section", format!("mode-{}", mode))}>
            <div class="instructions">
                <p class="instructions-title">
                    <i class={copy.icon}></i>{ format!(" {}", copy.instructions_title) }
                </p>
                <p>{ copy.instructions }</p>
            </div>

            <h2><i class="fa-solid fa-upload"></i>{ format!(" {}", copy.heading) }</h2>

            { render_file_input_area(model, ctx, mode, &copy) }
            { render_submit_button(model, ctx, &copy) }
            { render_error_message(model.state.error()) }
        </div>
    }
}

fn render_file_input_area(
    model: &Model,
    ctx: &Context<Model>,
    mode: UploadMode,
    copy: &ModeCopy,
) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        file.map(|file| Msg::FileChosen(file, FileSource::Picker))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(FILE_INPUT_ID));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept={mode.accept_filter()}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { render_staged_file(model, ctx, copy) }
            </div>
        </>
    }
}

fn render_staged_file(model: &Model, ctx: &Context<Model>, copy: &ModeCopy) -> Html {
    let Some(staged) = model.state.staged() else {
        return html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{ copy.drop_hint }</p>
                <p class="file-types">{ copy.formats }</p>
            </div>
        };
    };

    let remove = ctx.link().callback(|e: MouseEvent| {
        e.stop_propagation();
        Msg::Reset
    });

    let body = match &staged.handle.preview {
        Some(url) => html! {
            <img class="staged-preview" src={url.to_string()} alt="Preview" />
        },
        None => html! {
            <div class="staged-file">
                <i class={classes!(copy.icon, "staged-icon")}></i>
                <p class="staged-name">{ &staged.info.name }</p>
                <p class="staged-kind">{ copy.staged_kind }</p>
            </div>
        },
    };

    html! {
        <div class="staged">
            { body }
            <button class="remove-btn" title="Remove file" onclick={remove}>
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}

fn render_submit_button(model: &Model, ctx: &Context<Model>, copy: &ModeCopy) -> Html {
    let uploading = matches!(model.state.pending(), Some(PendingKind::Upload(_)));
    let link = ctx.link().clone();

    html! {
        <button
            class="analyze-btn"
            onclick={debounce(300, move || link.send_message(Msg::Submit))}
            disabled={model.state.staged().is_none() || model.state.is_busy()}
        >
            {
                if uploading {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-upload"></i>{ format!(" {}", copy.submit) }</> }
                }
            }
        </button>
    }
}

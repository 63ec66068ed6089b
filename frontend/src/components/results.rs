use super::super::{Model, Msg};
use super::utils::debounce;
use shared::fragment::extract_image_src;
use shared::knowledge::CategoryColor;
use shared::models::{NO_VIDEO_CRACKS_MESSAGE, crack_status_label};
use shared::{
    BatchResultItem, BatchSummary, DetectionResult, Modal, PendingKind, ReportKind, Results,
    RowKey, UploadMode, VideoFrameResult, VideoSummary,
};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    match model.state.results() {
        Results::Empty => html! {},
        Results::Single(result) => render_single_result(model, ctx, result),
        Results::Zip(items) => render_zip_results(model, ctx, items),
        Results::Video(frames) => render_video_results(model, ctx, frames),
    }
}

fn render_single_result(model: &Model, ctx: &Context<Model>, result: &DetectionResult) -> Html {
    let preview = model
        .state
        .staged()
        .and_then(|staged| staged.handle.preview.as_ref())
        .map(|url| url.to_string());
    let orientation = result.displayed_orientation();

    html! {
        <div class="results-container">
            <h3 class="results-title">{"Single Image Processing Result"}</h3>

            <div class="summary">
                <h4>{"Summary"}</h4>
                <div class="summary-stats">
                    <span>{"Status: "}<strong>{ if result.cracked { "Crack Detected" } else { "No Crack Detected" } }</strong></span>
                    if let Some(orientation) = orientation {
                        <span>{"Orientation: "}<strong>{ orientation }</strong></span>
                    }
                    if result.cracked {
                        <span>{"Individual Cracks: "}<strong>{ result.individual_bboxes.len() }</strong></span>
                    }
                </div>
            </div>

            <table class="results-table">
                { render_image_table_head() }
                <tbody>
                    <tr>
                        <td>{ render_thumbnail(preview.as_deref(), "Input image") }</td>
                        <td>{ render_status_badge(result.cracked) }</td>
                        <td>{ render_label_badge(orientation) }</td>
                        <td>{ render_annotated(ctx, result.annotated_image.as_deref(), orientation, "Annotated crack detection") }</td>
                        <td>
                            {
                                if result.cracked && result.individual_bboxes.is_empty() {
                                    html! { <span class="muted">{"Crack detected but no individual crack views available"}</span> }
                                } else {
                                    render_crop_disclosure(
                                        model,
                                        ctx,
                                        RowKey::new(UploadMode::Single, 0),
                                        result.cracked,
                                        &result.individual_bboxes,
                                        CropSource::Url,
                                    )
                                }
                            }
                        </td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

fn render_zip_results(model: &Model, ctx: &Context<Model>, items: &[BatchResultItem]) -> Html {
    let summary = BatchSummary::of(items);

    html! {
        <div class="results-container">
            <div class="results-header">
                <h3 class="results-title">{"Batch Processing Results"}</h3>
                { render_report_button(model, ctx, ReportKind::Batch, "Download Batch Report") }
            </div>

            <div class="summary">
                <h4>{"Summary"}</h4>
                <div class="summary-stats">
                    <span>{"Total Images: "}<strong>{ summary.total }</strong></span>
                    <span>{"Cracks Detected: "}<strong>{ summary.cracked }</strong></span>
                    <span>{"No Cracks: "}<strong>{ summary.clean }</strong></span>
                </div>
            </div>

            <table class="results-table">
                { render_image_table_head() }
                <tbody>
                    { for items.iter().enumerate().map(|(index, item)| {
                        let orientation = item.displayed_orientation();
                        let name = item.filename.clone().unwrap_or_else(|| format!("Image {}", index + 1));
                        html! {
                            <tr key={index}>
                                <td>{ render_thumbnail(item.input_image.as_deref(), &name) }</td>
                                <td>{ render_status_badge(item.cracked) }</td>
                                <td>{ render_label_badge(orientation) }</td>
                                <td>{ render_annotated(ctx, item.annotated_image.as_deref(), orientation, &format!("Annotated {}", name)) }</td>
                                <td>
                                    { render_crop_disclosure(
                                        model,
                                        ctx,
                                        RowKey::new(UploadMode::Zip, index),
                                        item.cracked,
                                        &item.separate_bounding_box_images,
                                        CropSource::Url,
                                    ) }
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_video_results(model: &Model, ctx: &Context<Model>, frames: &[VideoFrameResult]) -> Html {
    if frames.is_empty() {
        return html! {
            <div class="results-container">
                <h3 class="results-title">{"Video Processing Results"}</h3>
                <p class="no-results-message">{ NO_VIDEO_CRACKS_MESSAGE }</p>
            </div>
        };
    }

    let summary = VideoSummary::of(frames);

    html! {
        <div class="results-container">
            <div class="results-header">
                <h3 class="results-title">{"Video Processing Results"}</h3>
                { render_report_button(model, ctx, ReportKind::Video, "Download Video Report") }
            </div>

            <div class="summary">
                <h4>{"Summary"}</h4>
                <div class="summary-stats">
                    <span>{"Total Frames Analyzed: "}<strong>{ summary.total }</strong></span>
                    <span>{"Frames with Cracks: "}<strong>{ summary.cracked }</strong></span>
                    <span>{"Detection Rate: "}<strong>{ format!("{}%", summary.detection_rate()) }</strong></span>
                </div>
            </div>

            <table class="results-table">
                <thead>
                    <tr>
                        <th>{"Frame No"}</th>
                        <th>{"Timestamp"}</th>
                        <th>{"Crack Status"}</th>
                        <th>{"Classification"}</th>
                        <th>{"Annotated Frame"}</th>
                        <th>{"Focused Crack Views"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for frames.iter().enumerate().map(|(index, frame)| {
                        let classification = frame.display_classification();
                        html! {
                            <tr key={index}>
                                <td class="mono">{ frame.frame }</td>
                                <td class="mono">{ format!("{}s", frame.timestamp_secs) }</td>
                                <td>
                                    <span class={classes!("status-badge", if frame.is_cracked() { "status-cracked" } else { "status-clean" })}>
                                        { frame.crack_status.label() }
                                    </span>
                                </td>
                                <td>{ render_label_badge(classification) }</td>
                                <td>{ render_annotated_fragment(ctx, frame.full_annotated_image.as_deref(), classification, index) }</td>
                                <td>
                                    { render_crop_disclosure(
                                        model,
                                        ctx,
                                        RowKey::new(UploadMode::Video, index),
                                        frame.is_cracked(),
                                        &frame.separate_bounding_boxes,
                                        CropSource::Fragment,
                                    ) }
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_image_table_head() -> Html {
    html! {
        <thead>
            <tr>
                <th>{"Input Image"}</th>
                <th>{"Crack Status"}</th>
                <th>{"Orientation"}</th>
                <th>{"Annotated Image"}</th>
                <th>{"Focused Crack Views"}</th>
            </tr>
        </thead>
    }
}

fn render_report_button(model: &Model, ctx: &Context<Model>, kind: ReportKind, label: &str) -> Html {
    let generating = model.state.pending() == Some(PendingKind::Report(kind));
    let link = ctx.link().clone();

    html! {
        <button
            class="report-btn"
            onclick={debounce(300, move || link.send_message(Msg::RequestReport(kind)))}
            disabled={model.state.is_busy()}
        >
            {
                if generating {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Generating..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-file-pdf"></i>{ format!(" {}", label) }</> }
                }
            }
        </button>
    }
}

fn render_thumbnail(src: Option<&str>, alt: &str) -> Html {
    match src {
        Some(src) => html! { <img class="thumbnail" src={src.to_string()} alt={alt.to_string()} /> },
        None => html! { <div class="thumbnail-placeholder"><span>{"No Image"}</span></div> },
    }
}

fn render_status_badge(cracked: bool) -> Html {
    html! {
        <span class={classes!("status-badge", if cracked { "status-cracked" } else { "status-clean" })}>
            { crack_status_label(cracked) }
        </span>
    }
}

fn render_label_badge(label: Option<&str>) -> Html {
    match label {
        Some(label) => html! {
            <span class={classes!("label-badge", CategoryColor::for_label(label).css_class())}>
                { label }
            </span>
        },
        None => html! { <span class="muted">{"-"}</span> },
    }
}

fn render_annotated(ctx: &Context<Model>, src: Option<&str>, label: Option<&str>, alt: &str) -> Html {
    let Some(src) = src else {
        return html! { <span class="muted">{"-"}</span> };
    };

    let modal = Modal::annotated(src, label);
    let onclick = ctx.link().callback(move |_| Msg::OpenModal(modal.clone()));
    html! {
        <img class="thumbnail clickable" src={src.to_string()} alt={alt.to_string()} {onclick} />
    }
}

fn render_annotated_fragment(
    ctx: &Context<Model>,
    fragment: Option<&str>,
    label: Option<&str>,
    index: usize,
) -> Html {
    let modal = fragment.and_then(|fragment| Modal::annotated_fragment(fragment, label));
    let Some(modal) = modal else {
        return html! { <span class="muted">{"-"}</span> };
    };

    let src = modal.image_src.clone();
    let onclick = ctx.link().callback(move |_| Msg::OpenModal(modal.clone()));
    html! {
        <img
            class="thumbnail clickable"
            src={src}
            alt={format!("Annotated frame {}", index + 1)}
            {onclick}
        />
    }
}

/// How crop entries are encoded in a response.
#[derive(Clone, Copy)]
enum CropSource {
    Url,
    /// Server HTML fragments; only the image source is used.
    Fragment,
}

fn render_crop_disclosure(
    model: &Model,
    ctx: &Context<Model>,
    key: RowKey,
    cracked: bool,
    crops: &[String],
    source: CropSource,
) -> Html {
    if !cracked || crops.is_empty() {
        return html! { <span class="muted">{"No cracks detected"}</span> };
    }

    let expanded = model.state.is_expanded(key);
    let toggle = ctx.link().callback(move |_| Msg::ToggleRow(key));

    html! {
        <div class="crop-disclosure" id={format!("crops-{}", key)}>
            <button class="disclosure-btn" onclick={toggle}>
                <span>
                    <i class="fa-solid fa-magnifying-glass"></i>
                    { format!(" View individual cracks ({})", crops.len()) }
                </span>
                <span class="chevron">{ if expanded { "▼" } else { "▶" } }</span>
            </button>
            if expanded {
                <div class="crop-list">
                    { for crops.iter().enumerate().map(|(index, crop)| render_crop(ctx, index, crop, source)) }
                </div>
            }
        </div>
    }
}

fn render_crop(ctx: &Context<Model>, index: usize, crop: &str, source: CropSource) -> Html {
    let src = match source {
        CropSource::Url => Some(crop.to_string()),
        CropSource::Fragment => extract_image_src(crop),
    };
    let Some(src) = src else {
        log::warn!("Skipping crack view {} without a usable image", index + 1);
        return html! {};
    };

    let modal = Modal::crop(src.clone());
    let onclick = ctx.link().callback(move |_| Msg::OpenModal(modal.clone()));
    html! {
        <div class="crop-item" key={index} {onclick}>
            <img src={src} alt={format!("Crack {}", index + 1)} />
            <div class="crop-caption">{ format!("Crack {} (click to enlarge)", index + 1) }</div>
        </div>
    }
}

use super::super::{Model, Msg};
use super::utils::{debounce, render_error_message};
use shared::api::DEFAULT_CONFIDENCE;
use shared::knowledge::SeverityTone;
use shared::{DetectionResult, PendingKind, ReportKind, ReportPreview};
use yew::prelude::*;

/// Report panel for a cracked single-image result.
pub fn render_report_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(result) = model.state.report_target() else {
        return html! {};
    };

    let report = model.state.report();
    let link = ctx.link();

    html! {
        <div class="report-panel">
            <div class="report-header">
                <h3><i class="fa-solid fa-file-lines"></i>{" Analysis Report"}</h3>
                <div class="report-actions">
                    <button
                        class="preview-toggle-btn"
                        onclick={link.callback(|_| Msg::TogglePreviewDetails)}
                    >
                        <i class="fa-solid fa-file-lines"></i>
                        { if report.details_open { " Hide Preview" } else { " Show Preview" } }
                    </button>
                    { render_download_button(model, ctx) }
                </div>
            </div>

            { render_error_message(report.error.as_deref()) }
            { render_detection_summary(result) }

            if let Some(preview) = &report.preview {
                { render_risk_assessment(preview) }
                if report.details_open {
                    { render_guidance(preview) }
                }
            }
        </div>
    }
}

fn render_download_button(model: &Model, ctx: &Context<Model>) -> Html {
    let generating = model.state.pending() == Some(PendingKind::Report(ReportKind::Single));
    let link = ctx.link().clone();

    html! {
        <button
            class="report-btn"
            onclick={debounce(300, move || link.send_message(Msg::RequestReport(ReportKind::Single)))}
            disabled={model.state.is_busy()}
        >
            {
                if generating {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Generating..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-download"></i>{" Download PDF Report"}</> }
                }
            }
        </button>
    }
}

fn render_detection_summary(result: &DetectionResult) -> Html {
    let confidence = result.confidence.unwrap_or(DEFAULT_CONFIDENCE) * 100.0;

    html! {
        <div class="detection-summary">
            <h4>{"Detection Summary"}</h4>
            <div class="summary-grid">
                <div>
                    <span class="summary-label">{"Crack Type:"}</span>
                    <p>{ result.orientation.clone().unwrap_or_default() }</p>
                </div>
                <div>
                    <span class="summary-label">{"Confidence:"}</span>
                    <p>{ format!("{:.1}%", confidence) }</p>
                </div>
            </div>
        </div>
    }
}

fn render_risk_assessment(preview: &ReportPreview) -> Html {
    let tone = SeverityTone::for_severity(&preview.severity);

    html! {
        <div class="risk-assessment">
            <h4><i class="fa-solid fa-triangle-exclamation"></i>{" Risk Assessment"}</h4>
            <div class="summary-grid">
                <div class={classes!("severity-box", tone.css_class())}>
                    <span class="summary-label">{"Severity Level:"}</span>
                    <p>{ &preview.severity }</p>
                </div>
                <div class="urgency-box">
                    <span class="summary-label">{"Action Timeline:"}</span>
                    <p><i class="fa-regular fa-clock"></i>{ format!(" {}", preview.urgency) }</p>
                </div>
            </div>
        </div>
    }
}

fn render_guidance(preview: &ReportPreview) -> Html {
    html! {
        <div class="report-guidance">
            { render_list("fa-solid fa-triangle-exclamation", "Possible Causes", &preview.causes) }
            { render_list("fa-solid fa-circle-check", "Recommended Solutions", &preview.solutions) }
            { render_list("fa-solid fa-shield-halved", "Prevention Measures", &preview.prevention) }
        </div>
    }
}

fn render_list(icon: &'static str, title: &str, entries: &[String]) -> Html {
    html! {
        <div class="guidance-section">
            <h4><i class={icon}></i>{ format!(" {}", title) }</h4>
            <ul>
                { for entries.iter().map(|entry| html! { <li>{ entry }</li> }) }
            </ul>
        </div>
    }
}

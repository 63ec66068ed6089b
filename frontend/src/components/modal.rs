use super::super::{Model, Msg};
use shared::knowledge::{CrackKnowledge, SeverityTone};
use yew::prelude::*;

pub fn render_modal(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(modal) = model.state.modal() else {
        return html! {};
    };

    let link = ctx.link();
    let close = link.callback(|_| Msg::CloseModal);
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let content = match modal.details {
        Some(details) => html! {
            <div class="modal-content modal-split" onclick={keep_open}>
                <div class="modal-image-pane">
                    <img src={modal.image_src.clone()} alt="Annotated crack image" />
                </div>
                <div class="modal-details-pane">
                    { render_knowledge(details) }
                </div>
            </div>
        },
        None => html! {
            <img
                class="modal-image"
                src={modal.image_src.clone()}
                alt="Enlarged view"
                onclick={keep_open}
            />
        },
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <button class="modal-close" title="Close" onclick={close}>
                <i class="fa-solid fa-xmark"></i>
            </button>
            { content }
        </div>
    }
}

fn render_knowledge(details: &CrackKnowledge) -> Html {
    let tone = SeverityTone::for_severity(details.severity);

    html! {
        <div class="crack-details">
            <div class="crack-details-header">
                <h2>{ details.name }</h2>
                <div class="badges">
                    <span class={classes!("pill", tone.css_class())}>
                        { format!("Severity: {}", details.severity) }
                    </span>
                    <span class="pill urgency-pill">{ details.urgency }</span>
                </div>
            </div>
            { render_section("fa-solid fa-triangle-exclamation", "Possible Causes", details.causes) }
            { render_section("fa-solid fa-circle-check", "Recommended Solutions", details.solutions) }
            { render_section("fa-solid fa-shield-halved", "Prevention Measures", details.prevention) }
        </div>
    }
}

fn render_section(icon: &'static str, title: &str, entries: &[&str]) -> Html {
    html! {
        <div class="details-section">
            <h3><i class={icon}></i>{ format!(" {}", title) }</h3>
            <ul>
                { for entries.iter().map(|entry| html! { <li>{ *entry }</li> }) }
            </ul>
        </div>
    }
}
